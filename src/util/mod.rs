//! Utility helpers shared across storefront modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, dialogs,
//! viewport) and display formatting from state logic so the state modules
//! stay testable without a browser.

pub mod format;
pub mod notify;
pub mod storage;
pub mod viewport;
