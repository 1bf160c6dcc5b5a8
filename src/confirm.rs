//! Confirmation Prompt
//!
//! Blocking yes/no question asked before destructive actions.

/// Synchronous yes/no prompt
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm()` dialog. Declines when no window is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(confirm: &dyn Confirm) -> bool {
        confirm.confirm("Remove?")
    }

    #[test]
    fn test_closure_answers() {
        assert!(ask(&|_: &str| true));
        assert!(!ask(&|msg: &str| msg.is_empty()));
    }
}
