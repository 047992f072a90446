use super::aggregate::{compute_total, Preorder, PreorderPatch, ShippingAddress};
use crate::domain::common::validation::{
    parse_optional_date, parse_price, parse_quantity, require,
};
use crate::domain::common::ValidationErrors;
use crate::shared::status::Coded;
use serde::{Deserialize, Serialize};

pub const FIELD_CUSTOMER: &str = "Nombre del Cliente";
pub const FIELD_PRODUCT: &str = "Producto";
pub const FIELD_QUANTITY: &str = "Cantidad";
pub const FIELD_UNIT_PRICE: &str = "Precio Unitario";
pub const FIELD_ESTIMATED_DELIVERY: &str = "Fecha Estimada de Entrega";

/// Raw values of the preorder edit form. Numbers stay as typed so a bad
/// value is reported instead of being replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreorderDraft {
    pub customer: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub product: String,
    pub product_sku: String,
    pub quantity: String,
    pub unit_price: String,
    pub status: String,
    pub payment_status: String,
    /// Empty when no method was chosen
    pub payment_method: String,
    /// `yyyy-mm-dd` or empty
    pub estimated_delivery: String,
    pub shipping_street: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
    pub shipping_country: String,
    pub notes: String,
}

impl From<&Preorder> for PreorderDraft {
    fn from(p: &Preorder) -> Self {
        Self {
            customer: p.customer.clone(),
            customer_email: p.customer_email.clone(),
            customer_phone: p.customer_phone.clone(),
            product: p.product.clone(),
            product_sku: p.product_sku.clone(),
            quantity: p.quantity.to_string(),
            unit_price: format!("{:.2}", p.unit_price),
            status: p.status.code().to_string(),
            payment_status: p.payment_status.code().to_string(),
            payment_method: p
                .payment_method
                .as_ref()
                .map(|m| m.code().to_string())
                .unwrap_or_default(),
            estimated_delivery: p
                .estimated_delivery
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            shipping_street: p.shipping_address.street.clone(),
            shipping_city: p.shipping_address.city.clone(),
            shipping_postal_code: p.shipping_address.postal_code.clone(),
            shipping_country: p.shipping_address.country.clone(),
            notes: p.notes.clone(),
        }
    }
}

impl PreorderDraft {
    /// Total shown next to the inputs while typing; `None` until both
    /// quantity and price are valid
    pub fn preview_total(&self) -> Option<f64> {
        let quantity = parse_quantity(FIELD_QUANTITY, &self.quantity).ok()?;
        let unit_price = parse_price(FIELD_UNIT_PRICE, &self.unit_price).ok()?;
        Some(compute_total(quantity, unit_price))
    }

    pub fn validate(&self) -> Result<PreorderPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let customer = errors.collect(require(FIELD_CUSTOMER, &self.customer));
        let product = errors.collect(require(FIELD_PRODUCT, &self.product));
        let quantity = errors.collect(parse_quantity(FIELD_QUANTITY, &self.quantity));
        let unit_price = errors.collect(parse_price(FIELD_UNIT_PRICE, &self.unit_price));
        let estimated_delivery = errors.collect(parse_optional_date(
            FIELD_ESTIMATED_DELIVERY,
            &self.estimated_delivery,
        ));

        let (
            Some(customer),
            Some(product),
            Some(quantity),
            Some(unit_price),
            Some(estimated_delivery),
        ) = (customer, product, quantity, unit_price, estimated_delivery)
        else {
            return Err(errors);
        };

        let payment_method = match self.payment_method.trim() {
            "" => None,
            code => Some(Coded::parse(code)),
        };

        Ok(PreorderPatch {
            customer,
            customer_email: self.customer_email.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            product,
            product_sku: self.product_sku.trim().to_string(),
            quantity,
            unit_price,
            status: Coded::parse(&self.status),
            payment_status: Coded::parse(&self.payment_status),
            payment_method,
            estimated_delivery,
            shipping_address: ShippingAddress {
                street: self.shipping_street.trim().to_string(),
                city: self.shipping_city.trim().to_string(),
                postal_code: self.shipping_postal_code.trim().to_string(),
                country: self.shipping_country.trim().to_string(),
            },
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_preorder::aggregate::PaymentMethod;
    use crate::domain::a002_preorder::seed::mock_preorders;
    use crate::domain::common::{InMemoryStore, RecordStore, ValidationError};

    #[test]
    fn test_submit_recomputes_total() {
        let mut store = InMemoryStore::new(mock_preorders()).unwrap();
        let mut original = store.get("2").unwrap();
        original.total_amount = 5.0;

        let mut draft = PreorderDraft::from(&original);
        draft.quantity = "2".to_string();
        draft.unit_price = "1199.00".to_string();
        assert_eq!(draft.preview_total(), Some(2398.0));

        let patch = draft.validate().unwrap();
        let saved = store.update("2", &patch).unwrap();
        assert_eq!(saved.total_amount, 2398.00);
        assert_eq!(store.get("2").unwrap().total_amount, 2398.00);
    }

    #[test]
    fn test_round_trip_of_full_record() {
        let first = mock_preorders().remove(0);
        let patch = PreorderDraft::from(&first).validate().unwrap();
        assert_eq!(patch, PreorderPatch::from(&first));
        assert_eq!(patch.payment_method, Some(Coded::Known(PaymentMethod::CreditCard)));
    }

    #[test]
    fn test_invalid_numbers_are_rejected_not_coerced() {
        let mut draft = PreorderDraft::from(&mock_preorders()[0]);
        draft.quantity = String::new();
        draft.unit_price = "-3".to_string();

        assert_eq!(draft.preview_total(), None);
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.0,
            vec![
                ValidationError::Required { field: FIELD_QUANTITY },
                ValidationError::Negative { field: FIELD_UNIT_PRICE },
            ]
        );
    }

    #[test]
    fn test_zero_quantity_and_bad_date() {
        let mut draft = PreorderDraft::from(&mock_preorders()[0]);
        draft.quantity = "0".to_string();
        draft.estimated_delivery = "mañana".to_string();

        let errors = draft.validate().unwrap_err();
        assert!(matches!(
            errors.for_field(FIELD_QUANTITY),
            Some(ValidationError::NotPositive { .. })
        ));
        assert!(matches!(
            errors.for_field(FIELD_ESTIMATED_DELIVERY),
            Some(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_empty_delivery_and_method_mean_none() {
        let cancelled = mock_preorders().remove(4);
        let draft = PreorderDraft::from(&cancelled);
        assert_eq!(draft.estimated_delivery, "");
        let patch = draft.validate().unwrap();
        assert_eq!(patch.estimated_delivery, None);
        assert_eq!(patch.payment_method, None);
    }
}
