//! Per-item validation. Pure: never touches the store.

use super::error::ItemError;
use crate::model::{AdjustmentRequestItem, ProductId};

/// An item that passed validation; `quantity` is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidItem {
    pub index: usize,
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Check one item. `index` is its position in the batch, used in messages.
pub fn validate_item(index: usize, item: &AdjustmentRequestItem) -> Result<ValidItem, ItemError> {
    let product_id = item
        .product_id
        .map(ProductId)
        .ok_or(ItemError::MissingProductId { index })?;

    match item.quantity {
        None | Some(0) => Err(ItemError::MissingQuantity { index, product_id }),
        Some(quantity) if quantity < 0 => Err(ItemError::NonPositiveQuantity {
            index,
            product_id,
            quantity,
        }),
        Some(quantity) => Ok(ValidItem {
            index,
            product_id,
            quantity,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item() {
        let item = AdjustmentRequestItem::new(2, 8);
        assert_eq!(
            validate_item(0, &item),
            Ok(ValidItem {
                index: 0,
                product_id: ProductId(2),
                quantity: 8
            })
        );
    }

    #[test]
    fn test_missing_product_id() {
        let item = AdjustmentRequestItem {
            product_id: None,
            quantity: Some(5),
        };
        assert_eq!(
            validate_item(3, &item),
            Err(ItemError::MissingProductId { index: 3 })
        );
    }

    #[test]
    fn test_missing_or_zero_quantity() {
        for quantity in [None, Some(0)] {
            let item = AdjustmentRequestItem {
                product_id: Some(0),
                quantity,
            };
            assert_eq!(
                validate_item(1, &item),
                Err(ItemError::MissingQuantity {
                    index: 1,
                    product_id: ProductId(0)
                })
            );
        }
    }

    #[test]
    fn test_negative_quantity() {
        let err = validate_item(0, &AdjustmentRequestItem::new(4, -2)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "item 0 (product 4): quantity must be positive, got -2"
        );
    }
}
