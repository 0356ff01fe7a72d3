use serde::Serialize;

use crate::models::trip::Trip;
use crate::services::pricing_service::{PriceDisplay, PricingService};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountFlags {
    pub has_discount: bool,
    pub discount_always_available: bool,
    pub discount_requires_min_people: bool,
    pub discount_percentage: Option<f64>,
}

impl From<&Trip> for DiscountFlags {
    fn from(trip: &Trip) -> Self {
        Self {
            has_discount: trip.has_discount,
            discount_always_available: trip.discount_always_available,
            discount_requires_min_people: trip.discount_requires_min_people,
            discount_percentage: trip.discount_percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percentage", rename_all = "lowercase")]
pub enum DiscountBadge {
    None,
    /// Applies to everyone; the discounted price is what the customer pays.
    Definite(f64),
    /// Depends on group size, which is unknown until booking.
    Conditional(f64),
}

impl DiscountBadge {
    pub fn text(&self) -> Option<String> {
        match self {
            DiscountBadge::None => None,
            DiscountBadge::Definite(pct) => Some(format!("{}% OFF", pct)),
            DiscountBadge::Conditional(pct) => Some(format!("Up to {}% OFF", pct)),
        }
    }
}

/// What a list card shows for price: either a struck-through original next
/// to the discounted price, or a single undiscounted price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPrice {
    pub display_price: String,
    pub struck_price: Option<String>,
    pub badge: DiscountBadge,
    pub badge_text: Option<String>,
}

pub struct DiscountService;

impl DiscountService {
    pub fn resolve(flags: &DiscountFlags) -> DiscountBadge {
        let pct = match PricingService::usable_discount(flags.has_discount, flags.discount_percentage)
        {
            Some(pct) => pct,
            None => return DiscountBadge::None,
        };

        if flags.discount_always_available {
            DiscountBadge::Definite(pct)
        } else if flags.discount_requires_min_people {
            DiscountBadge::Conditional(pct)
        } else {
            DiscountBadge::None
        }
    }

    /// Combine the badge policy with the price pair for a list view.
    pub fn list_price(price: Option<f64>, flags: &DiscountFlags, currency_symbol: &str) -> ListPrice {
        let badge = Self::resolve(flags);
        let display = PricingService::format_price(price, flags.has_discount, flags.discount_percentage);

        let (display_price, struck_price) = match (&badge, display) {
            (
                DiscountBadge::Definite(_),
                PriceDisplay {
                    original,
                    discounted: Some(discounted),
                    ..
                },
            ) => (discounted, Some(original)),
            // Conditional and unrecognised discounts are shown at the full price.
            (_, PriceDisplay { original, .. }) => (original, None),
        };

        ListPrice {
            display_price: PricingService::format_amount(&display_price, currency_symbol),
            struck_price: struck_price.map(|p| PricingService::format_amount(&p, currency_symbol)),
            badge,
            badge_text: badge.text(),
        }
    }
}
