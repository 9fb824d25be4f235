//! Betting markets and the categories they are presented under.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A labeled betting market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Category name. Empty or unknown values land in the catch-all group.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub owner: String,
    /// Hidden markets are not offered for new bets but still count in stats.
    #[serde(default)]
    pub hidden: bool,
}

impl Market {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            owner: String::new(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// A named market grouping with an explicit presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, order: Option<u32>) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    /// Presentation ordering: ascending `order`, missing order last, ties by
    /// name.
    #[must_use]
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        let by_order = match (self.order, other.order) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_order.then_with(|| collate(&self.name, &other.name))
    }
}

/// Returns categories in presentation order.
#[must_use]
pub fn sorted_categories(categories: &[Category]) -> Vec<Category> {
    let mut sorted = categories.to_vec();
    sorted.sort_by(Category::display_cmp);
    sorted
}

/// Moves the category at presentation position `from` to position `to` and
/// re-indexes every category as `0..n`.
///
/// Positions refer to the presentation order returned by
/// [`sorted_categories`]. Out-of-range positions are clamped.
#[must_use]
pub fn reorder_categories(categories: &[Category], from: usize, to: usize) -> Vec<Category> {
    let mut sorted = sorted_categories(categories);
    if sorted.is_empty() {
        return sorted;
    }

    let last = sorted.len() - 1;
    let moved = sorted.remove(from.min(last));
    sorted.insert(to.min(last), moved);

    for (index, category) in sorted.iter_mut().enumerate() {
        category.order = u32::try_from(index).ok();
    }
    sorted
}

/// Markets that may be chosen for a new bet.
#[must_use]
pub fn selectable_markets(markets: &[Market]) -> Vec<&Market> {
    markets.iter().filter(|m| !m.hidden).collect()
}

/// Locale-aware string comparison.
///
/// Compares case- and accent-insensitively first, then falls back to the raw
/// strings so the ordering stays total.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(fold_char)
        .cmp(b.chars().flat_map(fold_char));
    primary.then_with(|| a.cmp(b))
}

// Latin-1 accents commonly found in market names.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    };
    base.to_lowercase()
}
