//! Fixed value tables that generated documents are sampled from.

use crate::errors::SeedError;

pub const CATEGORIES: &[&str] = &["cap", "bag", "shoes", "scarf", "dress"];
pub const COLORS: &[&str] = &["black", "white", "red", "blue", "beige"];
pub const SIZES: &[&str] = &["S", "M", "L", "XL"];
pub const PRICES: &[f64] = &[15.0, 16.0, 100.0, 50.0];
pub const DESCRIPTIONS: &[&str] = &["pretty", "cheap", "high quality", "classic", "lux"];

/// One pool per sampled field. Every pool is non-empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuePools {
    categories: &'static [&'static str],
    colors: &'static [&'static str],
    sizes: &'static [&'static str],
    prices: &'static [f64],
    descriptions: &'static [&'static str],
}

impl ValuePools {
    pub const DEFAULT: ValuePools = ValuePools {
        categories: CATEGORIES,
        colors: COLORS,
        sizes: SIZES,
        prices: PRICES,
        descriptions: DESCRIPTIONS,
    };

    pub fn new(
        categories: &'static [&'static str],
        colors: &'static [&'static str],
        sizes: &'static [&'static str],
        prices: &'static [f64],
        descriptions: &'static [&'static str],
    ) -> Result<Self, SeedError> {
        for (name, len) in [
            ("categories", categories.len()),
            ("colors", colors.len()),
            ("sizes", sizes.len()),
            ("prices", prices.len()),
            ("descriptions", descriptions.len()),
        ] {
            if len == 0 {
                return Err(SeedError::validation(format!(
                    "value pool '{}' must not be empty",
                    name
                )));
            }
        }
        if let Some(price) = prices.iter().find(|p| !p.is_finite()) {
            return Err(SeedError::validation(format!(
                "price {} is not a finite number",
                price
            )));
        }

        Ok(Self {
            categories,
            colors,
            sizes,
            prices,
            descriptions,
        })
    }

    pub fn categories(&self) -> &'static [&'static str] {
        self.categories
    }
    pub fn colors(&self) -> &'static [&'static str] {
        self.colors
    }
    pub fn sizes(&self) -> &'static [&'static str] {
        self.sizes
    }
    pub fn prices(&self) -> &'static [f64] {
        self.prices
    }
    pub fn descriptions(&self) -> &'static [&'static str] {
        self.descriptions
    }
}

impl Default for ValuePools {
    fn default() -> Self {
        Self::DEFAULT
    }
}
