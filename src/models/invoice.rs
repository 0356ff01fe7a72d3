use serde::{Deserialize, Serialize};

use super::lenient::{
    deserialize_bool, deserialize_f64_or_zero, deserialize_id, deserialize_lenient_vec,
};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Draft,
    #[serde(alias = "cancelled")]
    Canceled,
    #[serde(other)]
    Unknown,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Unknown
    }
}

impl InvoiceStatus {
    /// Colour key used by the frontend badge.
    pub fn display_color(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "green",
            InvoiceStatus::Pending => "yellow",
            InvoiceStatus::Overdue => "red",
            InvoiceStatus::Draft => "gray",
            InvoiceStatus::Canceled => "slate",
            InvoiceStatus::Unknown => "gray",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Canceled => "Canceled",
            InvoiceStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct InvoiceItem {
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub total: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PaymentRecord {
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Invoice {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub items: Vec<InvoiceItem>,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub subtotal_amount: f64,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub tax_amount: f64,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub discount_amount: f64,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub total_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub payment_history: Vec<PaymentRecord>,
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub picked_up: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
    pub payment_method: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PickupRequest {
    pub ref_number: String,
    pub picked_up: bool,
}

/// Display model for an invoice page.
#[derive(Debug, Serialize, Clone)]
pub struct InvoiceView {
    pub id: String,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub items: Vec<InvoiceItem>,
    pub subtotal: String,
    pub tax: String,
    pub discount: Option<String>,
    pub total: String,
    pub amount_paid: String,
    pub balance_due: String,
    pub payment_history: Vec<PaymentRecord>,
    pub picked_up: bool,
    pub can_pay: bool,
}
