//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and sections while reading/writing
//! shared state from Leptos context providers.

pub mod auth_gate;
pub mod catalog_grid;
pub mod nav_bar;
pub mod part_card;
pub mod profile_card;
pub mod project_panel;
pub mod quick_links;
