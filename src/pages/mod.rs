//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The storefront is a single page; it owns section layout and delegates
//! each section's contents to `components`.

pub mod storefront;
