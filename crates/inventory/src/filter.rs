//! Search and low-stock filters over an item sequence.
//!
//! Both filters preserve the input order, so feeding them the store's
//! id-ordered listing keeps results in creation order.

use stockroom_core::{DomainError, DomainResult};

use crate::item::Item;

/// Case-insensitive substring match of `query` against item names.
///
/// An absent or empty query keeps every item.
pub fn search(items: Vec<Item>, query: Option<&str>) -> Vec<Item> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return items,
    };

    items
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Upper bound (exclusive) for the low-stock query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockThreshold(i64);

impl StockThreshold {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("threshold cannot be negative"));
        }
        Ok(Self(value))
    }

    /// Parse the raw `threshold` query parameter. It is required.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        let raw = raw.ok_or_else(|| DomainError::validation("threshold is required"))?;
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("threshold must be an integer"))?;
        Self::new(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

/// Items whose quantity is strictly below `threshold`.
///
/// Items without a quantity are never low stock.
pub fn low_stock(items: Vec<Item>, threshold: StockThreshold) -> Vec<Item> {
    items
        .into_iter()
        .filter(|item| matches!(item.quantity, Some(q) if q < threshold.get()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemId;

    fn item(id: i64, name: &str, quantity: Option<i64>) -> Item {
        Item {
            id: ItemId::new(id).unwrap(),
            name: name.to_string(),
            quantity,
            price: None,
        }
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![item(1, "apple", None), item(2, "banana", None)];
        assert_eq!(names(&search(items.clone(), Some("APP"))), ["apple"]);
        assert_eq!(names(&search(items.clone(), Some("an"))), ["banana"]);
        assert!(search(items, Some("zzz")).is_empty());
    }

    #[test]
    fn empty_or_missing_query_keeps_everything() {
        let items = vec![item(1, "apple", None), item(2, "banana", None)];
        assert_eq!(search(items.clone(), None).len(), 2);
        assert_eq!(search(items, Some("")).len(), 2);
    }

    #[test]
    fn search_preserves_order() {
        let items = vec![item(1, "Red apple", None), item(2, "pear", None), item(3, "apple pie", None)];
        assert_eq!(names(&search(items, Some("apple"))), ["Red apple", "apple pie"]);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let items = vec![item(1, "apple", Some(5)), item(2, "banana", Some(2)), item(3, "kiwi", Some(3))];
        let low = low_stock(items, StockThreshold::new(3).unwrap());
        let ids: Vec<i64> = low.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn items_without_quantity_are_not_low_stock() {
        let items = vec![item(1, "apple", None), item(2, "banana", Some(0))];
        let low = low_stock(items, StockThreshold::new(1).unwrap());
        assert_eq!(names(&low), ["banana"]);
    }

    #[test]
    fn zero_threshold_matches_nothing() {
        let items = vec![item(1, "apple", Some(0))];
        assert!(low_stock(items, StockThreshold::new(0).unwrap()).is_empty());
    }

    #[test]
    fn threshold_parsing() {
        assert_eq!(StockThreshold::parse(Some("3")).unwrap().get(), 3);
        assert_eq!(StockThreshold::parse(Some(" 0 ")).unwrap().get(), 0);
        assert!(matches!(StockThreshold::parse(None), Err(DomainError::Validation(_))));
        assert!(matches!(StockThreshold::parse(Some("-1")), Err(DomainError::Validation(_))));
        assert!(matches!(StockThreshold::parse(Some("")), Err(DomainError::Validation(_))));
        assert!(matches!(StockThreshold::parse(Some("few")), Err(DomainError::Validation(_))));
        assert!(matches!(StockThreshold::parse(Some("2.5")), Err(DomainError::Validation(_))));
    }
}
