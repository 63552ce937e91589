//! Listing filter types.

use std::collections::BTreeSet;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Lower price bound before the shopper touches the slider.
pub const DEFAULT_MIN_PRICE: Money = Money::new(0);

/// Upper price bound before the shopper touches the slider.
pub const DEFAULT_MAX_PRICE: Money = Money::new(50_000);

/// Active listing filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Selected categories. Empty selects every category.
    pub categories: BTreeSet<Category>,
    /// Inclusive lower price bound.
    pub min_price: Money,
    /// Inclusive upper price bound.
    pub max_price: Money,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl Filters {
    /// Filters with a custom starting price range.
    pub fn with_price_range(min_price: Money, max_price: Money) -> Result<Self, CommerceError> {
        if min_price > max_price {
            return Err(CommerceError::InvalidPriceRange {
                min: min_price.amount(),
                max: max_price.amount(),
            });
        }
        Ok(Self {
            min_price,
            max_price,
            ..Self::default()
        })
    }

    /// Shallow-merge a patch. Fields absent from the patch are kept.
    pub fn merge(self, patch: FiltersPatch) -> Self {
        Self {
            categories: patch.categories.unwrap_or(self.categories),
            min_price: patch.min_price.unwrap_or(self.min_price),
            max_price: patch.max_price.unwrap_or(self.max_price),
        }
    }

    /// Whether a category is selected.
    pub fn has_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Whether a product passes the price bounds and category selection.
    pub fn matches(&self, product: &Product) -> bool {
        let in_range = product.price >= self.min_price && product.price <= self.max_price;
        let in_category =
            self.categories.is_empty() || self.categories.contains(&product.category);
        in_range && in_category
    }
}

/// A partial filter update. `None` fields leave the current value alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FiltersPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeSet<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Money>,
}

impl FiltersPatch {
    /// Patch that replaces the category selection.
    pub fn categories<I, C>(categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        Self {
            categories: Some(categories.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Patch that sets the lower price bound.
    pub fn min_price(min_price: Money) -> Self {
        Self {
            min_price: Some(min_price),
            ..Self::default()
        }
    }

    /// Patch that sets the upper price bound.
    pub fn max_price(max_price: Money) -> Self {
        Self {
            max_price: Some(max_price),
            ..Self::default()
        }
    }

    /// Patch a category checkbox submits: select it if absent, deselect if present.
    pub fn toggle_category(current: &Filters, category: impl Into<Category>) -> Self {
        let category = category.into();
        let mut categories = current.categories.clone();
        if !categories.remove(&category) {
            categories.insert(category);
        }
        Self {
            categories: Some(categories),
            ..Self::default()
        }
    }
}
