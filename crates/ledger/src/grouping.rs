//! Markets grouped by category for presentation.

use banca_core::{collate, sorted_categories, Category, Market};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Markets filed under one category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketGroup {
    pub category: String,
    pub markets: Vec<Market>,
}

/// Ordered category → markets mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketGroups {
    pub groups: Vec<MarketGroup>,
}

impl MarketGroups {
    /// Markets of `category`, if that group exists.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[Market]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.markets.as_slice())
    }

    /// Category names in presentation order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.category.as_str())
    }

    /// Groups that hold at least one market.
    pub fn non_empty(&self) -> impl Iterator<Item = &MarketGroup> {
        self.groups.iter().filter(|g| !g.markets.is_empty())
    }
}

/// Files every market under its category.
///
/// Groups follow category presentation order; the `catch_all` group is
/// always present and comes last unless it is itself a listed category.
/// Markets with an empty or unlisted category go to `catch_all`. Inside a
/// group markets are sorted by name with [`collate`].
#[must_use]
pub fn group_markets(markets: &[Market], categories: &[Category], catch_all: &str) -> MarketGroups {
    let mut groups: Vec<MarketGroup> = sorted_categories(categories)
        .into_iter()
        .map(|c| MarketGroup {
            category: c.name,
            markets: Vec::new(),
        })
        .collect();
    let mut seen = HashSet::new();
    groups.retain(|g| seen.insert(g.category.clone()));

    if !groups.iter().any(|g| g.category == catch_all) {
        groups.push(MarketGroup {
            category: catch_all.to_string(),
            markets: Vec::new(),
        });
    }

    let mut unfiled = 0usize;
    for market in markets {
        let position = groups
            .iter()
            .position(|g| !market.category.is_empty() && g.category == market.category)
            .or_else(|| {
                unfiled += 1;
                groups.iter().position(|g| g.category == catch_all)
            });
        if let Some(index) = position {
            groups[index].markets.push(market.clone());
        }
    }

    for group in &mut groups {
        group.markets.sort_by(|a, b| collate(&a.name, &b.name));
    }

    tracing::debug!(
        markets = markets.len(),
        groups = groups.len(),
        unfiled,
        "markets grouped"
    );
    MarketGroups { groups }
}
