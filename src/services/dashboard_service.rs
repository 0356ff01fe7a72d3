use std::fmt::Display;

use crate::models::dashboard::DashboardStats;
use crate::services::api_client::StoreApi;

fn or_default<T: Default, E: Display>(
    section: &'static str,
    result: Result<T, E>,
    degraded: &mut Vec<&'static str>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Dashboard section {} unavailable: {}", section, err);
            degraded.push(section);
            T::default()
        }
    }
}

pub struct DashboardService;

impl DashboardService {
    /// Fetch every dashboard section at once. A failing section is reported
    /// in `degraded` and rendered empty; it never fails the whole dashboard.
    pub async fn stats(api: &dyn StoreApi, token: Option<&str>) -> DashboardStats {
        let (analytics, recent_users, invoices) = futures::join!(
            api.analytics_summary(token),
            api.recent_users(token),
            api.invoice_summary(token),
        );

        let mut degraded = Vec::new();
        DashboardStats {
            analytics: or_default("analytics", analytics, &mut degraded),
            recent_users: or_default("recent_users", recent_users, &mut degraded),
            invoices: or_default("invoices", invoices, &mut degraded),
            degraded,
        }
    }
}
