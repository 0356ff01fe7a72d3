use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDisplay {
    pub original: String,
    pub discounted: Option<String>,
    pub discount: Option<f64>,
}

pub struct PricingService;

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

impl PricingService {
    /// Build the original/discounted price pair for display.
    ///
    /// When a discount is flagged, `price` is the already discounted amount
    /// returned by the API and the original price is back-computed from it.
    pub fn format_price(
        price: Option<f64>,
        has_discount: bool,
        discount_percentage: Option<f64>,
    ) -> PriceDisplay {
        let price = match usable(price) {
            Some(p) => p,
            None => {
                return PriceDisplay {
                    original: "0".to_string(),
                    discounted: None,
                    discount: None,
                }
            }
        };

        match Self::usable_discount(has_discount, discount_percentage) {
            Some(pct) => PriceDisplay {
                original: Self::round_amount(Self::original_price(price, pct)),
                discounted: Some(Self::round_amount(price)),
                discount: Some(pct),
            },
            None => PriceDisplay {
                original: Self::round_amount(price),
                discounted: None,
                discount: None,
            },
        }
    }

    /// Only percentages strictly between 0 and 100 are applied. At 100 or more
    /// the back-computation divides by zero or flips sign; a negative value
    /// would make the "original" price lower than the price paid.
    pub fn usable_discount(has_discount: bool, discount_percentage: Option<f64>) -> Option<f64> {
        if !has_discount {
            return None;
        }
        usable(discount_percentage).filter(|pct| *pct > 0.0 && *pct < 100.0)
    }

    pub fn original_price(discounted_price: f64, discount_percentage: f64) -> f64 {
        discounted_price / (1.0 - discount_percentage / 100.0)
    }

    /// Child price defaults to half the adult price when unset
    pub fn child_price_or_default(adult_price: f64, child_price: Option<f64>) -> f64 {
        match child_price {
            Some(c) if c.is_finite() && c > 0.0 => c,
            _ => adult_price * 0.5,
        }
    }

    pub fn round_amount(amount: f64) -> String {
        format!("{}", amount.round() as i64)
    }

    /// Render a whole amount with the configured currency symbol, e.g. "€100"
    pub fn format_amount(amount: &str, currency_symbol: &str) -> String {
        format!("{}{}", currency_symbol, amount)
    }

    /// Two-decimal rendering used for invoice totals
    pub fn format_money(amount: f64, currency_symbol: &str) -> String {
        format!("{}{:.2}", currency_symbol, amount)
    }
}
