use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult, ItemId};

/// An inventory item as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Raw create/update payload as it arrives over the wire.
///
/// Every field is optional at this stage so that a missing `name` is reported
/// as a validation failure rather than a decode failure. Use
/// [`ItemInput::validate`] to obtain an [`ItemDraft`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ItemInput {
    /// Decode a request body.
    ///
    /// The body must be a JSON object. Wrong field types (a numeric `name`, a
    /// fractional or textual `quantity`, a textual `price`) fail here.
    pub fn from_json(body: &[u8]) -> DomainResult<Self> {
        let value: JsonValue = serde_json::from_slice(body)
            .map_err(|e| DomainError::validation(format!("body is not valid JSON: {e}")))?;

        if !value.is_object() {
            return Err(DomainError::validation("body must be a JSON object"));
        }

        serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("invalid field: {e}")))
    }

    /// Apply the item rules and produce a draft the store will accept.
    pub fn validate(self) -> DomainResult<ItemDraft> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(DomainError::validation("name cannot be empty")),
            None => return Err(DomainError::validation("name is required")),
        };

        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                return Err(DomainError::validation("quantity cannot be negative"));
            }
        }

        if let Some(price) = self.price {
            if !price.is_finite() {
                return Err(DomainError::validation("price must be a finite number"));
            }
            if price < 0.0 {
                return Err(DomainError::validation("price cannot be negative"));
            }
        }

        Ok(ItemDraft {
            name,
            quantity: self.quantity,
            price: self.price,
        })
    }
}

/// Validated mutable fields of an item (everything except the id).
///
/// Only obtainable through [`ItemInput::validate`], so a store holding a draft
/// never has to re-check the rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    name: String,
    quantity: Option<i64>,
    price: Option<f64>,
}

impl ItemDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Option<i64> {
        self.quantity
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Attach an id, producing the stored representation.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
