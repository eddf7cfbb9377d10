//! Application state, one module per storefront component.
//!
//! ARCHITECTURE
//! ============
//! Each state type exclusively owns its data and exposes the operations UI
//! handlers call. Components hold them in `RwSignal`s provided through
//! context; nothing here touches the DOM.

pub mod auth;
pub mod catalog;
pub mod nav;
pub mod project;
pub mod session;
