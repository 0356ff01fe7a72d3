use serde::{Deserialize, Serialize};

use super::lenient::{deserialize_f64_or_zero, deserialize_id};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AnalyticsSummary {
    pub total_bookings: u64,
    #[serde(deserialize_with = "deserialize_f64_or_zero")]
    pub total_revenue: f64,
    pub active_trips: u64,
    pub total_users: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecentUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InvoiceSummary {
    pub paid: u64,
    pub pending: u64,
    pub overdue: u64,
    #[serde(deserialize_with = "deserialize_f64_or_zero")]
    pub outstanding_amount: f64,
}

/// Admin dashboard payload. Each section is fetched independently and falls
/// back to its default when the upstream call fails.
#[derive(Debug, Serialize, Clone, Default)]
pub struct DashboardStats {
    pub analytics: AnalyticsSummary,
    pub recent_users: Vec<RecentUser>,
    pub invoices: InvoiceSummary,
    pub degraded: Vec<&'static str>,
}
