//! Section navigation with a back-navigable history stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one section is visible at a time. Nav-bar buttons and dashboard
//! quick-links call [`NavState::navigate`]; the back button calls
//! [`NavState::back`]. Scrolling to the top is a UI-boundary side effect
//! applied by the caller after a successful navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::StorefrontConfig;

/// A named, mutually exclusive view and whether it is currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub visible: bool,
}

/// Visibility of every section plus the navigation history.
///
/// History invariants: never empty, and no two consecutive entries are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    sections: Vec<Section>,
    history: Vec<String>,
}

impl NavState {
    /// Build the static section set and show `default_section` without
    /// recording it twice.
    pub fn new<I, S>(section_ids: I, default_section: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = section_ids
            .into_iter()
            .map(|id| Section { id: id.into(), visible: false })
            .collect();
        let mut state = Self { sections, history: vec![default_section.to_owned()] };
        state.show_section(default_section, false);
        state
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.section_ids(), &config.default_section)
    }

    /// Make `id` the only visible section.
    ///
    /// With `push_to_history`, `id` is appended unless it is already the top
    /// entry. Unknown ids are ignored so the one-visible invariant holds.
    /// Returns whether the id was known.
    pub fn show_section(&mut self, id: &str, push_to_history: bool) -> bool {
        if !self.sections.iter().any(|s| s.id == id) {
            log::warn!("ignoring navigation to unknown section '{id}'");
            return false;
        }
        for section in &mut self.sections {
            section.visible = section.id == id;
        }
        if push_to_history && self.history.last().map(String::as_str) != Some(id) {
            self.history.push(id.to_owned());
        }
        log::debug!("section '{id}' shown, history depth {}", self.history.len());
        true
    }

    /// Handle a navigation control. Controls without a target do nothing.
    pub fn navigate(&mut self, target: Option<&str>) -> bool {
        match target {
            Some(id) if !id.is_empty() => self.show_section(id, true),
            _ => false,
        }
    }

    /// Step back one entry: drop the current top, then redisplay the prior
    /// entry, which ends up on top again. No-op while back is disabled.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.pop();
        let Some(prev) = self.history.pop() else {
            return false;
        };
        self.show_section(&prev, true)
    }

    /// Back is enabled only with more than one history entry.
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// The visible section id.
    pub fn current(&self) -> Option<&str> {
        self.sections.iter().find(|s| s.visible).map(|s| s.id.as_str())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.visible && s.id == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
