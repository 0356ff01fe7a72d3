use serde_json::Value;

use crate::config::AppConfig;
use crate::models::invoice::{Invoice, InvoiceStatus, InvoiceView, PaymentRequest, PickupRequest};
use crate::services::api_client::{ApiError, ApiResult, StoreApi};
use crate::services::pricing_service::PricingService;

fn currency_symbol<'a>(currency: Option<&str>, fallback: &'a str) -> &'a str {
    match currency.map(|c| c.trim().to_ascii_uppercase()).as_deref() {
        Some("EUR") => "€",
        Some("USD") => "$",
        Some("GBP") => "£",
        Some("EGP") => "E£",
        _ => fallback,
    }
}

pub struct InvoiceService;

impl InvoiceService {
    pub fn view(invoice: Invoice, default_symbol: &str) -> InvoiceView {
        let symbol = currency_symbol(invoice.currency.as_deref(), default_symbol);
        let amount_paid: f64 = invoice.payment_history.iter().map(|p| p.amount).sum();
        let balance_due = (invoice.total_amount - amount_paid).max(0.0);
        let can_pay = matches!(
            invoice.status,
            InvoiceStatus::Pending | InvoiceStatus::Overdue
        ) && balance_due > 0.0;

        InvoiceView {
            status_label: invoice.status.label(),
            status_color: invoice.status.display_color(),
            status: invoice.status,
            subtotal: PricingService::format_money(invoice.subtotal_amount, symbol),
            tax: PricingService::format_money(invoice.tax_amount, symbol),
            discount: (invoice.discount_amount > 0.0)
                .then(|| PricingService::format_money(invoice.discount_amount, symbol)),
            total: PricingService::format_money(invoice.total_amount, symbol),
            amount_paid: PricingService::format_money(amount_paid, symbol),
            balance_due: PricingService::format_money(balance_due, symbol),
            can_pay,
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            items: invoice.items,
            payment_history: invoice.payment_history,
            picked_up: invoice.picked_up,
        }
    }

    pub async fn get(
        api: &dyn StoreApi,
        id: &str,
        token: Option<&str>,
        config: &AppConfig,
    ) -> ApiResult<InvoiceView> {
        let invoice = api.get_invoice(id, token).await?;
        Ok(Self::view(invoice, &config.currency_symbol))
    }

    pub async fn pay(
        api: &dyn StoreApi,
        id: &str,
        payment: &PaymentRequest,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        if payment.payment_method.trim().is_empty() {
            return Err(ApiError::Status {
                status: 400,
                message: "Payment method is required".to_string(),
            });
        }
        api.pay_invoice(id, payment, token).await
    }

    pub async fn lookup(
        api: &dyn StoreApi,
        ref_number: &str,
        config: &AppConfig,
    ) -> ApiResult<InvoiceView> {
        let ref_number = Self::require_reference(ref_number)?;
        let invoice = api.fastcheck_invoice(ref_number).await?;
        Ok(Self::view(invoice, &config.currency_symbol))
    }

    /// Toggle the pickup flag. The returned view reflects the new state only
    /// once the upstream has accepted the change.
    pub async fn set_picked_up(
        api: &dyn StoreApi,
        request: &PickupRequest,
        config: &AppConfig,
    ) -> ApiResult<InvoiceView> {
        let ref_number = Self::require_reference(&request.ref_number)?;
        let mut invoice = api.fastcheck_invoice(ref_number).await?;

        let request = PickupRequest {
            ref_number: ref_number.to_string(),
            picked_up: request.picked_up,
        };
        api.fast_pickup(&request).await?;
        log::info!(
            "Invoice {} pickup set to {}",
            invoice.invoice_number,
            request.picked_up
        );

        invoice.picked_up = request.picked_up;
        Ok(Self::view(invoice, &config.currency_symbol))
    }

    fn require_reference(ref_number: &str) -> ApiResult<&str> {
        let trimmed = ref_number.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Status {
                status: 400,
                message: "Reference number is required".to_string(),
            });
        }
        Ok(trimmed)
    }
}
