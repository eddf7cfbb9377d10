//! Storefront configuration parsed from the embedded `assets/storefront.json`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections, dashboard quick-links, catalog contents, and number formatting
//! are data, not code. Every state object is seeded from this config at
//! startup, and tests build their own configs through [`StorefrontConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "pt_user";
pub const DEFAULT_SECTION: &str = "dashboard";

const EMBEDDED_CONFIG: &str = include_str!("../assets/storefront.json");

/// Error returned when a storefront config cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document did not match the config schema.
    #[error("failed to parse storefront config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The config parsed but references sections that do not exist.
    #[error("invalid storefront config: {0}")]
    Invalid(String),
}

/// What a section renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Landing view with quick-links.
    Dashboard,
    /// One or more catalog grids.
    #[default]
    Catalog,
    /// Project estimate and calculator.
    Project,
    /// Signed-in user details and logout.
    Profile,
}

/// A navigable, mutually exclusive view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: SectionKind,
    /// Whether the section gets a button in the navigation bar.
    #[serde(default = "default_true")]
    pub nav: bool,
}

/// A dashboard shortcut button pointing at a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    /// Target section. A link without one renders but does nothing.
    #[serde(default)]
    pub section: Option<String>,
}

/// A selectable category in a catalog's filter control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub value: String,
    pub label: String,
}

/// Raw card attributes as they appear in the catalog data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Numeric string, parsed leniently when the catalog is built.
    pub price: String,
}

/// One catalog grid living inside a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDef {
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub cards: Vec<CardDef>,
}

/// Separators and currency marker used for every displayed amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
            currency: default_currency(),
        }
    }
}

/// Full storefront configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_section")]
    pub default_section: String,
    pub sections: Vec<SectionDef>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
    #[serde(default)]
    pub catalogs: Vec<CatalogDef>,
    #[serde(default)]
    pub format: FormatConfig,
}

impl StorefrontConfig {
    /// Parse and validate the config bundled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Parse and validate a config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Section ids in declaration order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate section id: {}", section.id)));
            }
        }
        if !seen.contains(self.default_section.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "default section '{}' is not declared",
                self.default_section
            )));
        }
        for catalog in &self.catalogs {
            if !seen.contains(catalog.section.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "catalog '{}' targets unknown section '{}'",
                    catalog.title, catalog.section
                )));
            }
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

fn default_section() -> String {
    DEFAULT_SECTION.to_owned()
}

fn default_group_separator() -> String {
    ",".to_owned()
}

fn default_decimal_separator() -> String {
    ".".to_owned()
}

fn default_currency() -> String {
    "₽".to_owned()
}
