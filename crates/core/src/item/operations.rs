use uuid::Uuid;

use super::types::{Item, ItemInput};

/// Generates a new unique item identifier.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Builds the item to store from the owner, the item id and caller input.
///
/// The input's own `user_id` and `item_id` are ignored; only its attributes
/// are copied. Unset attributes stay unset, so writing the result is a full
/// overwrite of the stored item.
pub fn build_item(
    user_id: impl Into<String>,
    item_id: impl Into<String>,
    input: &ItemInput,
) -> Item {
    Item::new(user_id, item_id).with_attributes(input.attributes.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemAttributes;

    #[test]
    fn test_generate_item_id_is_uuid() {
        let id = generate_item_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generate_item_id_is_unique() {
        assert_ne!(generate_item_id(), generate_item_id());
    }

    #[test]
    fn test_build_item_ignores_input_keys() {
        let input = ItemInput {
            user_id: Some("someone-else".to_string()),
            item_id: Some("ignored".to_string()),
            attributes: ItemAttributes {
                name: Some("A".to_string()),
                role: Some("Eng".to_string()),
                ..Default::default()
            },
        };

        let item = build_item("u1", "i1", &input);

        assert_eq!(item.user_id, "u1");
        assert_eq!(item.item_id, "i1");
        assert_eq!(item.attributes.name.as_deref(), Some("A"));
        assert_eq!(item.attributes.role.as_deref(), Some("Eng"));
        assert_eq!(item.attributes.summary, None);
    }
}
