//! Catalog filtering by category and sorting by price.
//!
//! DESIGN
//! ======
//! Each catalog captures its cards once, in declaration order, as the base
//! order. Every filter or sort change recomputes a list of indices into that
//! base via the pure [`render_order`]; cards themselves are never cloned,
//! reordered in place, or dropped. The grid renders cards keyed by index so
//! DOM nodes are moved, not recreated.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::config::{CardDef, CatalogDef, CategoryDef, StorefrontConfig};
use crate::util::format::parse_amount;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub name: String,
    /// Category the card is filtered by.
    pub kind: String,
    pub price: f64,
}

impl Card {
    /// Build a card from raw attributes; an unparseable price reads as `0`.
    pub fn from_def(def: &CardDef) -> Self {
        Self { name: def.name.clone(), kind: def.kind.clone(), price: parse_amount(&def.price) }
    }
}

/// Price ordering selected in a catalog's sort control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep base order.
    #[default]
    Default,
    /// Cheapest first.
    Asc,
    /// Most expensive first.
    Desc,
}

impl SortMode {
    /// Parse a sort control value. Anything unrecognized is `Default`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Compute the display order for `base` as indices into it.
///
/// Cards are filtered by exact category match unless `category` is
/// [`ALL_CATEGORIES`], then stably sorted by price for `Asc`/`Desc`. Ties
/// keep their base order.
pub fn render_order(base: &[Card], category: &str, sort: SortMode) -> Vec<usize> {
    let mut order: Vec<usize> = base
        .iter()
        .enumerate()
        .filter(|(_, card)| category == ALL_CATEGORIES || card.kind == category)
        .map(|(i, _)| i)
        .collect();
    match sort {
        SortMode::Default => {}
        SortMode::Asc => order.sort_by(|&a, &b| base[a].price.total_cmp(&base[b].price)),
        SortMode::Desc => order.sort_by(|&a, &b| base[b].price.total_cmp(&base[a].price)),
    }
    order
}

/// One catalog grid with its own controls and base order.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub section: String,
    pub title: String,
    pub categories: Vec<CategoryDef>,
    base: Vec<Card>,
    category: String,
    sort: SortMode,
    order: Vec<usize>,
}

impl CatalogState {
    pub fn new(section: &str, title: &str, categories: Vec<CategoryDef>, cards: Vec<Card>) -> Self {
        let order = (0..cards.len()).collect();
        Self {
            section: section.to_owned(),
            title: title.to_owned(),
            categories,
            base: cards,
            category: ALL_CATEGORIES.to_owned(),
            sort: SortMode::Default,
            order,
        }
    }

    pub fn from_def(def: &CatalogDef) -> Self {
        Self::new(&def.section, &def.title, def.categories.clone(), def.cards.iter().map(Card::from_def).collect())
    }

    /// Select a category and recompute the order.
    pub fn set_category(&mut self, category: &str) {
        category.clone_into(&mut self.category);
        self.apply();
    }

    /// Select a sort mode and recompute the order.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.apply();
    }

    /// Recompute the order from the base and the current controls.
    pub fn apply(&mut self) {
        self.order = render_order(&self.base, &self.category, self.sort);
        log::debug!(
            "catalog '{}' filtered: category={} sort={} -> {} of {} cards",
            self.section,
            self.category,
            self.sort.as_str(),
            self.order.len(),
            self.base.len()
        );
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Cards in base (declaration) order.
    pub fn base(&self) -> &[Card] {
        &self.base
    }

    /// Indices into [`Self::base`] in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Visible cards in display order, paired with their base index.
    pub fn visible(&self) -> Vec<(usize, &Card)> {
        self.order.iter().map(|&i| (i, &self.base[i])).collect()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.base.get(index)
    }
}

/// All catalogs on the page; each is filtered independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogsState {
    pub catalogs: Vec<CatalogState>,
}

impl CatalogsState {
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self { catalogs: config.catalogs.iter().map(CatalogState::from_def).collect() }
    }

    pub fn for_section(&self, section: &str) -> impl Iterator<Item = &CatalogState> {
        self.catalogs.iter().filter(move |c| c.section == section)
    }

    pub fn get(&self, index: usize) -> Option<&CatalogState> {
        self.catalogs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CatalogState> {
        self.catalogs.get_mut(index)
    }
}
