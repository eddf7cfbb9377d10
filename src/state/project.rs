//! Running project estimate: selected parts plus labor cost.
//!
//! SYSTEM CONTEXT
//! ==============
//! Catalog "add" buttons append parts here. The project panel renders
//! [`ProjectState::render`] reactively, so the summary is recomputed on
//! initial load, every add, every labor edit, and every clear.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::config::FormatConfig;
use crate::util::format::{format_amount, format_price, parse_amount};
use crate::util::notify::Notifier;

pub const CONFIRM_CLEAR_MESSAGE: &str = "Clear the current project?";
pub const EXPORT_STUB_MESSAGE: &str = "Export to PDF or emailing the estimate can be implemented here.";

/// A part added to the project. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectPart {
    pub name: String,
    pub price: f64,
}

/// One rendered line of the parts list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLine {
    pub name: String,
    /// Formatted price with currency marker.
    pub price: String,
}

/// Display-ready project totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectSummary {
    pub lines: Vec<ProjectLine>,
    pub subtotal: String,
    pub total: String,
}

/// Parts list and the raw labor input text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectState {
    parts: Vec<ProjectPart>,
    labor_input: String,
}

/// Message shown after a part is added.
pub fn part_added_message(name: &str) -> String {
    format!("Part \"{name}\" added to the project.")
}

impl ProjectState {
    /// Append a part and tell the user which one was added.
    pub fn add_part(&mut self, name: &str, price: f64, notifier: &impl Notifier) {
        self.parts.push(ProjectPart { name: name.to_owned(), price });
        log::debug!("project part added: {name} ({price}), {} parts", self.parts.len());
        notifier.alert(&part_added_message(name));
    }

    /// Store the labor field text exactly as typed.
    pub fn set_labor_input(&mut self, raw: &str) {
        raw.clone_into(&mut self.labor_input);
    }

    pub fn labor_input(&self) -> &str {
        &self.labor_input
    }

    /// Labor cost; empty or malformed input counts as zero.
    pub fn labor(&self) -> f64 {
        parse_amount(&self.labor_input)
    }

    pub fn subtotal(&self) -> f64 {
        self.parts.iter().map(|p| p.price).sum()
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.labor()
    }

    pub fn parts(&self) -> &[ProjectPart] {
        &self.parts
    }

    /// Recompute line items and both sums for display.
    pub fn render(&self, format: &FormatConfig) -> ProjectSummary {
        ProjectSummary {
            lines: self
                .parts
                .iter()
                .map(|p| ProjectLine { name: p.name.clone(), price: format_price(p.price, format) })
                .collect(),
            subtotal: format_amount(self.subtotal(), format),
            total: format_amount(self.total(), format),
        }
    }

    /// Empty the parts list if the user confirms. Labor input is kept.
    /// Returns whether the list was cleared.
    pub fn clear_project(&mut self, notifier: &impl Notifier) -> bool {
        if !notifier.confirm(CONFIRM_CLEAR_MESSAGE) {
            return false;
        }
        self.parts.clear();
        log::debug!("project cleared");
        true
    }

    /// Export placeholder: only notifies.
    pub fn export_estimate(&self, notifier: &impl Notifier) {
        notifier.alert(EXPORT_STUB_MESSAGE);
    }
}
