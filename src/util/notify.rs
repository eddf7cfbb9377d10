//! Blocking user notifications (alert/confirm dialogs).
//!
//! DESIGN
//! ======
//! State operations that must talk to the user take a [`Notifier`] so tests
//! can script confirmation answers and inspect the messages shown.

/// Blocking dialog capability.
pub trait Notifier {
    /// Show an informational message.
    fn alert(&self, message: &str);
    /// Ask a yes/no question; `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;
}

/// Native browser `alert`/`confirm` dialogs.
///
/// Outside the `csr` build messages are only logged and every confirmation
/// is declined.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Notifier for BrowserDialogs {
    fn alert(&self, message: &str) {
        log::debug!("alert: {message}");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message(message) {
                    log::warn!("alert dialog failed: {err:?}");
                }
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        log::debug!("confirm: {message}");
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

/// Test double that records every message and answers confirmations with a
/// fixed response.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub answer: bool,
    pub alerts: std::sync::Mutex<Vec<String>>,
    pub confirms: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn answering(answer: bool) -> Self {
        Self { answer, ..Self::default() }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_owned());
        }
    }

    fn confirm(&self, message: &str) -> bool {
        if let Ok(mut confirms) = self.confirms.lock() {
            confirms.push(message.to_owned());
        }
        self.answer
    }
}
