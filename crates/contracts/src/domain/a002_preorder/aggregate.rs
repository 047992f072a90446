use crate::domain::common::Record;
use crate::shared::format::amount_search_text;
use crate::shared::list_query::Searchable;
use crate::shared::status::{Coded, StatusEntry, StatusTable, Tone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ============================================================================
// Closed enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreorderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl StatusTable for PreorderStatus {
    const TABLE: &'static [StatusEntry<Self>] = &[
        StatusEntry { status: PreorderStatus::Pending, code: "pending", label: "Pendiente", tone: Tone::Warning, icon: "clock" },
        StatusEntry { status: PreorderStatus::Confirmed, code: "confirmed", label: "Confirmado", tone: Tone::Success, icon: "check-circle" },
        StatusEntry { status: PreorderStatus::Processing, code: "processing", label: "Procesando", tone: Tone::Info, icon: "package" },
        StatusEntry { status: PreorderStatus::Shipped, code: "shipped", label: "Enviado", tone: Tone::Accent, icon: "truck" },
        StatusEntry { status: PreorderStatus::Delivered, code: "delivered", label: "Entregado", tone: Tone::Success, icon: "check-circle" },
        StatusEntry { status: PreorderStatus::Cancelled, code: "cancelled", label: "Cancelado", tone: Tone::Danger, icon: "trash" },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl StatusTable for PaymentStatus {
    const TABLE: &'static [StatusEntry<Self>] = &[
        StatusEntry { status: PaymentStatus::Pending, code: "pending", label: "Pendiente", tone: Tone::Warning, icon: "clock" },
        StatusEntry { status: PaymentStatus::Paid, code: "paid", label: "Pagado", tone: Tone::Success, icon: "check-circle" },
        StatusEntry { status: PaymentStatus::Failed, code: "failed", label: "Fallido", tone: Tone::Danger, icon: "x-circle" },
        StatusEntry { status: PaymentStatus::Refunded, code: "refunded", label: "Reembolsado", tone: Tone::Neutral, icon: "refresh" },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
    Cash,
}

impl StatusTable for PaymentMethod {
    const TABLE: &'static [StatusEntry<Self>] = &[
        StatusEntry { status: PaymentMethod::CreditCard, code: "credit_card", label: "Tarjeta de Crédito", tone: Tone::Neutral, icon: "credit-card" },
        StatusEntry { status: PaymentMethod::DebitCard, code: "debit_card", label: "Tarjeta de Débito", tone: Tone::Neutral, icon: "credit-card" },
        StatusEntry { status: PaymentMethod::Paypal, code: "paypal", label: "PayPal", tone: Tone::Neutral, icon: "credit-card" },
        StatusEntry { status: PaymentMethod::BankTransfer, code: "bank_transfer", label: "Transferencia", tone: Tone::Neutral, icon: "credit-card" },
        StatusEntry { status: PaymentMethod::Cash, code: "cash", label: "Efectivo", tone: Tone::Neutral, icon: "credit-card" },
    ];
    const FALLBACK_ICON: &'static str = "credit-card";
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }
}

/// Customer order placed before the product is available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preorder {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub product: String,
    #[serde(default)]
    pub product_sku: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Always `quantity * unit_price`, rounded to cents
    pub total_amount: f64,
    pub status: Coded<PreorderStatus>,
    pub payment_status: Coded<PaymentStatus>,
    #[serde(default)]
    pub payment_method: Option<Coded<PaymentMethod>>,
    pub estimated_delivery: Option<NaiveDate>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub notes: String,
}

/// Line total rounded to cents
pub fn compute_total(quantity: u32, unit_price: f64) -> f64 {
    (f64::from(quantity) * unit_price * 100.0).round() / 100.0
}

/// Validated edit of a preorder
#[derive(Debug, Clone, PartialEq)]
pub struct PreorderPatch {
    pub customer: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub product: String,
    pub product_sku: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub status: Coded<PreorderStatus>,
    pub payment_status: Coded<PaymentStatus>,
    pub payment_method: Option<Coded<PaymentMethod>>,
    pub estimated_delivery: Option<NaiveDate>,
    pub shipping_address: ShippingAddress,
    pub notes: String,
}

impl PreorderPatch {
    /// Total the record will have once this patch is applied
    pub fn total(&self) -> f64 {
        compute_total(self.quantity, self.unit_price)
    }
}

impl From<&Preorder> for PreorderPatch {
    fn from(p: &Preorder) -> Self {
        Self {
            customer: p.customer.clone(),
            customer_email: p.customer_email.clone(),
            customer_phone: p.customer_phone.clone(),
            product: p.product.clone(),
            product_sku: p.product_sku.clone(),
            quantity: p.quantity,
            unit_price: p.unit_price,
            status: p.status.clone(),
            payment_status: p.payment_status.clone(),
            payment_method: p.payment_method.clone(),
            estimated_delivery: p.estimated_delivery,
            shipping_address: p.shipping_address.clone(),
            notes: p.notes.clone(),
        }
    }
}

impl Record for Preorder {
    type Patch = PreorderPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    fn apply(&mut self, patch: &PreorderPatch) {
        self.customer = patch.customer.clone();
        self.customer_email = patch.customer_email.clone();
        self.customer_phone = patch.customer_phone.clone();
        self.product = patch.product.clone();
        self.product_sku = patch.product_sku.clone();
        self.quantity = patch.quantity;
        self.unit_price = patch.unit_price;
        self.total_amount = patch.total();
        self.status = patch.status.clone();
        self.payment_status = patch.payment_status.clone();
        self.payment_method = patch.payment_method.clone();
        self.estimated_delivery = patch.estimated_delivery;
        self.shipping_address = patch.shipping_address.clone();
        self.notes = patch.notes.clone();
    }

    fn element_name() -> &'static str {
        "Prepedido"
    }

    fn list_name() -> &'static str {
        "Prepedidos"
    }
}

impl Searchable for Preorder {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.order_number.as_str()),
            Cow::Borrowed(self.customer.as_str()),
            Cow::Borrowed(self.product.as_str()),
            Cow::Borrowed(self.status.code()),
            Cow::Borrowed(self.payment_status.code()),
            Cow::Owned(amount_search_text(self.total_amount)),
        ]
    }
}

// ============================================================================
// Store-wide statistics
// ============================================================================

/// Stat cards above the preorder table. Computed over every record in the
/// store; the current search and date filter do not affect them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreorderStats {
    pub pending: usize,
    pub confirmed: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
    /// Sum of `total_amount` over records with payment status `paid`
    pub total_revenue: f64,
}

impl PreorderStats {
    pub fn from_records(records: &[Preorder]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.status.known() {
                Some(PreorderStatus::Pending) => stats.pending += 1,
                Some(PreorderStatus::Confirmed) => stats.confirmed += 1,
                Some(PreorderStatus::Processing) => stats.processing += 1,
                Some(PreorderStatus::Shipped) => stats.shipped += 1,
                Some(PreorderStatus::Delivered) => stats.delivered += 1,
                Some(PreorderStatus::Cancelled) => stats.cancelled += 1,
                None => {}
            }
            if record.payment_status.is(PaymentStatus::Paid) {
                stats.total_revenue += record.total_amount;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_preorder::seed::mock_preorders;

    #[test]
    fn test_totals_are_consistent_in_seed() {
        for p in mock_preorders() {
            assert_eq!(p.total_amount, compute_total(p.quantity, p.unit_price), "{}", p.id);
        }
    }

    #[test]
    fn test_recompute_ignores_previous_total() {
        let mut preorder = mock_preorders().remove(0);
        preorder.total_amount = 1.0;
        let mut patch = PreorderPatch::from(&preorder);
        patch.quantity = 2;
        patch.unit_price = 1199.00;
        preorder.apply(&patch);
        assert_eq!(preorder.total_amount, 2398.00);
    }

    #[test]
    fn test_compute_total_rounds_to_cents() {
        assert_eq!(compute_total(3, 19.99), 59.97);
        assert_eq!(compute_total(3, 0.1), 0.3);
    }

    #[test]
    fn test_stats_are_store_wide() {
        let stats = PreorderStats::from_records(&mock_preorders());
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.confirmed, 3);
        assert_eq!(stats.processing, 2);
        assert_eq!(stats.shipped, 2);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.cancelled, 2);
        assert_eq!(stats.total_revenue, 10138.0);
    }

    #[test]
    fn test_unknown_payment_status_passes_through() {
        let mut preorder = mock_preorders().remove(0);
        preorder.payment_status = Coded::parse("chargeback");
        assert_eq!(preorder.payment_status.label(), "chargeback");
        assert_eq!(preorder.payment_status.tone(), Tone::Neutral);
        assert_eq!(PreorderStats::from_records(&[preorder]).total_revenue, 0.0);
    }

    #[test]
    fn test_wire_names() {
        let preorder = mock_preorders().remove(4);
        let json = serde_json::to_value(&preorder).unwrap();
        assert_eq!(json["orderNumber"], "PRE-2024-005");
        assert_eq!(json["paymentStatus"], "refunded");
        assert_eq!(json["totalAmount"], 498.0);
        assert!(json["estimatedDelivery"].is_null());
    }
}
