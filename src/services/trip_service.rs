use serde::Serialize;

use crate::config::AppConfig;
use crate::models::trip::{Package, Trip, TripQuery};
use crate::services::api_client::{ApiResult, StoreApi};
use crate::services::discount_service::{DiscountFlags, DiscountService, ListPrice};
use crate::services::duration_format::DurationFormatter;
use crate::services::included_normalizer::normalize_included;
use crate::services::pricing_service::{PriceDisplay, PricingService};

/// Trip as shown on list cards and carousels.
#[derive(Debug, Serialize, Clone)]
pub struct TripCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub href: String,
    pub duration: String,
    pub price: ListPrice,
    pub child_price: Option<String>,
    pub max_persons: Option<i64>,
    pub child_allowed: bool,
    pub included: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct TripDetail {
    #[serde(flatten)]
    pub card: TripCard,
    pub images: Vec<String>,
    pub pricing: PriceDisplay,
    pub package: Option<PackageCard>,
    pub related_trips: Vec<TripCard>,
}

#[derive(Debug, Serialize, Clone)]
pub struct PackageCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub is_image_list: bool,
    pub href: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct PackageDetail {
    #[serde(flatten)]
    pub package: PackageCard,
    pub trips: Vec<TripCard>,
}

pub struct TripService;

impl TripService {
    pub fn card(trip: &Trip, currency_symbol: &str) -> TripCard {
        let flags = DiscountFlags::from(trip);
        let child_price = trip
            .child_allowed
            .then(|| trip.child_price.filter(|p| *p > 0.0))
            .flatten()
            .map(|p| PricingService::format_amount(&PricingService::round_amount(p), currency_symbol));

        TripCard {
            id: trip.id.clone(),
            name: trip.name.clone(),
            description: trip.description.clone().unwrap_or_default(),
            image: trip.images.first().cloned(),
            href: format!("/trips/{}", trip.id),
            duration: DurationFormatter::trip_with_unit(trip.duration, trip.duration_unit.as_deref()),
            price: DiscountService::list_price(trip.adult_price, &flags, currency_symbol),
            child_price,
            max_persons: trip.maxim_person,
            child_allowed: trip.child_allowed,
            included: normalize_included(&trip.included),
        }
    }

    pub fn package_card(package: &Package) -> PackageCard {
        PackageCard {
            id: package.id.clone(),
            name: package.name.clone(),
            description: package.description.clone().unwrap_or_default(),
            images: package.images.clone(),
            is_image_list: package.is_image_list,
            href: format!("/packages/{}", package.id),
        }
    }

    pub async fn list_cards(
        api: &dyn StoreApi,
        query: &TripQuery,
        config: &AppConfig,
    ) -> ApiResult<Vec<TripCard>> {
        let trips = api.list_trips(query).await?;
        Ok(trips
            .iter()
            .map(|trip| Self::card(trip, &config.currency_symbol))
            .collect())
    }

    /// Load everything the trip page needs. The trip itself is required; the
    /// package and related trips are fetched together and each falls back to
    /// empty on failure.
    pub async fn detail(api: &dyn StoreApi, id: &str, config: &AppConfig) -> ApiResult<TripDetail> {
        let trip = api.get_trip(id).await?;

        let package_fut = async {
            match trip.package_id.as_deref() {
                Some(package_id) => match api.get_package(package_id).await {
                    Ok(package) => Some(package),
                    Err(err) => {
                        log::warn!("Package {} for trip {} unavailable: {}", package_id, id, err);
                        None
                    }
                },
                None => None,
            }
        };

        let related_query = TripQuery {
            limit: Some(config.related_trips_limit),
            exclude: Some(trip.id.clone()),
            package_id: None,
        };
        let related_fut = async {
            match api.list_trips(&related_query).await {
                Ok(trips) => trips,
                Err(err) => {
                    log::warn!("Related trips for {} unavailable: {}", id, err);
                    Vec::new()
                }
            }
        };

        let (package, related) = futures::join!(package_fut, related_fut);
        let symbol = config.currency_symbol.as_str();

        Ok(TripDetail {
            card: Self::card(&trip, symbol),
            images: trip.images.clone(),
            pricing: PricingService::format_price(
                trip.adult_price,
                trip.has_discount,
                trip.discount_percentage,
            ),
            package: package.as_ref().map(Self::package_card),
            related_trips: related
                .iter()
                .filter(|t| t.id != trip.id)
                .take(config.related_trips_limit as usize)
                .map(|t| Self::card(t, symbol))
                .collect(),
        })
    }

    pub async fn list_packages(api: &dyn StoreApi) -> ApiResult<Vec<PackageCard>> {
        let packages = api.list_packages().await?;
        Ok(packages.iter().map(Self::package_card).collect())
    }

    pub async fn package_detail(
        api: &dyn StoreApi,
        id: &str,
        config: &AppConfig,
    ) -> ApiResult<PackageDetail> {
        let query = TripQuery {
            package_id: Some(id.to_string()),
            ..Default::default()
        };
        let (package, trips) = futures::join!(api.get_package(id), api.list_trips(&query));
        let package = package?;

        let trips = trips.unwrap_or_else(|err| {
            log::warn!("Trips for package {} unavailable: {}", id, err);
            Vec::new()
        });

        Ok(PackageDetail {
            package: Self::package_card(&package),
            trips: trips
                .iter()
                .filter(|t| t.package_id.as_deref() == Some(package.id.as_str()))
                .map(|t| Self::card(t, &config.currency_symbol))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::discount_service::DiscountBadge;
    use serde_json::json;

    fn trip(value: serde_json::Value) -> Trip {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_card_with_definite_discount() {
        let card = TripService::card(
            &trip(json!({
                "id": 5,
                "name": "Giftun Island",
                "adult_price": 90,
                "has_discount": true,
                "discount_always_available": true,
                "discount_percentage": 10,
                "duration": 90
            })),
            "€",
        );

        assert_eq!(card.href, "/trips/5");
        assert_eq!(card.duration, "1h 30m");
        assert_eq!(card.price.display_price, "€90");
        assert_eq!(card.price.struck_price.as_deref(), Some("€100"));
        assert_eq!(card.price.badge_text.as_deref(), Some("10% OFF"));
    }

    #[test]
    fn test_card_with_group_discount() {
        let card = TripService::card(
            &trip(json!({
                "id": 5,
                "name": "Giftun Island",
                "adult_price": 90,
                "has_discount": true,
                "discount_always_available": false,
                "discount_requires_min_people": true,
                "discount_percentage": 10
            })),
            "€",
        );

        assert_eq!(card.price.display_price, "€100");
        assert_eq!(card.price.struck_price, None);
        assert_eq!(card.price.badge, DiscountBadge::Conditional(10.0));
        assert_eq!(card.price.badge_text.as_deref(), Some("Up to 10% OFF"));
        assert_eq!(card.duration, "Duration TBD");
    }

    #[test]
    fn test_child_price_only_when_allowed() {
        let allowed = TripService::card(
            &trip(json!({"id": 1, "adult_price": 60, "child_price": 30.4, "child_allowed": true})),
            "€",
        );
        assert_eq!(allowed.child_price.as_deref(), Some("€30"));

        let not_allowed = TripService::card(
            &trip(json!({"id": 1, "adult_price": 60, "child_price": 30, "child_allowed": false})),
            "€",
        );
        assert_eq!(not_allowed.child_price, None);
    }
}
