use super::aggregate::{
    compute_total, PaymentMethod, PaymentStatus, Preorder, PreorderStatus, ShippingAddress,
};
use crate::shared::status::Coded;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn preorder(
    id: &str,
    customer: &str,
    product: &str,
    quantity: u32,
    unit_price: f64,
    status: PreorderStatus,
    payment_status: PaymentStatus,
    estimated_delivery: Option<NaiveDate>,
    created_at: NaiveDate,
) -> Preorder {
    Preorder {
        id: id.to_string(),
        order_number: format!("PRE-2024-{:0>3}", id),
        customer: customer.to_string(),
        customer_email: String::new(),
        customer_phone: String::new(),
        product: product.to_string(),
        product_sku: String::new(),
        quantity,
        unit_price,
        total_amount: compute_total(quantity, unit_price),
        status: Coded::Known(status),
        payment_status: Coded::Known(payment_status),
        payment_method: None,
        estimated_delivery,
        created_at,
        shipping_address: ShippingAddress::default(),
        notes: String::new(),
    }
}

/// The twelve preorders the console starts with, newest first
pub fn mock_preorders() -> Vec<Preorder> {
    use PaymentStatus::{Paid, Refunded};
    use PreorderStatus::*;

    let mut iphone = preorder(
        "1", "Juan Pérez", "iPhone 15 Pro Max", 2, 1199.0, Confirmed, Paid,
        Some(date(2024, 2, 15)), date(2024, 1, 15),
    );
    iphone.customer_email = "juan.perez@email.com".to_string();
    iphone.customer_phone = "+34 666 123 456".to_string();
    iphone.product_sku = "IPH15PM-256-TIT".to_string();
    iphone.payment_method = Some(PaymentMethod::CreditCard.into());
    iphone.shipping_address = ShippingAddress {
        street: "Calle Mayor 123".to_string(),
        city: "Madrid".to_string(),
        postal_code: "28001".to_string(),
        country: "España".to_string(),
    };
    iphone.notes =
        "Cliente prefiere entrega por la mañana. Llamar antes de entregar.".to_string();

    vec![
        iphone,
        preorder("2", "María García", "MacBook Pro M3", 1, 2499.0, Pending, PaymentStatus::Pending, Some(date(2024, 2, 20)), date(2024, 1, 14)),
        preorder("3", "Carlos López", "iPad Air", 3, 599.0, Processing, Paid, Some(date(2024, 2, 10)), date(2024, 1, 12)),
        preorder("4", "Ana Martín", "Apple Watch Series 9", 1, 399.0, Shipped, Paid, Some(date(2024, 1, 25)), date(2024, 1, 10)),
        preorder("5", "Pedro Ruiz", "AirPods Pro", 2, 249.0, Cancelled, Refunded, None, date(2024, 1, 8)),
        preorder("6", "Laura Sánchez", "iPad Pro", 1, 1299.0, Confirmed, Paid, Some(date(2024, 2, 18)), date(2024, 1, 7)),
        preorder("7", "Miguel Torres", "MacBook Air M2", 1, 1199.0, Processing, Paid, Some(date(2024, 2, 12)), date(2024, 1, 6)),
        preorder("8", "Carmen Ruiz", "iPhone 15", 1, 899.0, Shipped, Paid, Some(date(2024, 1, 28)), date(2024, 1, 5)),
        preorder("9", "Antonio López", "Apple TV 4K", 2, 199.0, Delivered, Paid, Some(date(2024, 1, 20)), date(2024, 1, 4)),
        preorder("10", "Isabel García", "HomePod mini", 3, 99.0, PreorderStatus::Pending, PaymentStatus::Pending, Some(date(2024, 2, 22)), date(2024, 1, 3)),
        preorder("11", "Roberto Martín", "Magic Keyboard", 1, 179.0, Cancelled, Refunded, None, date(2024, 1, 2)),
        preorder("12", "Elena Fernández", "Studio Display", 1, 1749.0, Confirmed, Paid, Some(date(2024, 2, 25)), date(2024, 1, 1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_numbers() {
        let records = mock_preorders();
        assert_eq!(records[0].order_number, "PRE-2024-001");
        assert_eq!(records[11].order_number, "PRE-2024-012");
    }

    #[test]
    fn test_cancelled_have_no_delivery_date() {
        for p in mock_preorders() {
            if p.status.is(PreorderStatus::Cancelled) {
                assert_eq!(p.estimated_delivery, None);
            }
        }
    }
}
