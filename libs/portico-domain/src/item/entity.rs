//! Domain entity for stored items
//!
//! An `Item` is a plain data transfer object: it carries a user identifier and
//! a piece of text between the API layers and the storage backends. It has no
//! behavior beyond construction and read access.

use serde::{Deserialize, Serialize};

use crate::item::ids::UserId;

/// A single stored item
///
/// Items are immutable once built. Fields are set at construction and only
/// read afterwards; there is no setter.
///
/// # Example
///
/// ```rust
/// use portico_domain::item::Item;
///
/// let item = Item::new(1, "hello");
/// assert_eq!(item.user_id().get(), 1);
/// assert_eq!(item.text(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Identifier of the user this item belongs to
    user_id: UserId,

    /// Free-form text payload
    text: String,
}

impl Item {
    /// Create a new Item
    ///
    /// This is a pure constructor and performs no validation. Business rules
    /// live in `ItemService`.
    pub fn new(user_id: i64, text: impl Into<String>) -> Self {
        Self {
            user_id: UserId::new(user_id),
            text: text.into(),
        }
    }

    /// Get the owning user's identifier
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Get the text payload
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split the item back into its raw fields
    pub fn into_parts(self) -> (UserId, String) {
        (self.user_id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "hello");

        assert_eq!(item.user_id(), UserId::new(1));
        assert_eq!(item.text(), "hello");
    }

    #[test]
    fn test_item_equality() {
        let a = Item::new(1, "hello");
        let b = Item::new(1, String::from("hello"));
        let c = Item::new(2, "hello");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_item_into_parts() {
        let (user_id, text) = Item::new(9, "bye").into_parts();

        assert_eq!(user_id.get(), 9);
        assert_eq!(text, "bye");
    }

    #[test]
    fn test_item_json_shape() {
        let json = serde_json::to_value(Item::new(3, "x")).unwrap();
        assert_eq!(json, serde_json::json!({ "user_id": 3, "text": "x" }));
    }
}
