//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! `Item`. Attribute names come from `ITEM_FIELDS`, so the stored shape is
//! the GraphQL shape. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use resume_core::item::{FieldKind, Item, ITEM_FIELDS};
use resume_core::storage::RepositoryError;

use super::keys;

/// Convert an Item to a DynamoDB item.
///
/// Unset attributes are omitted rather than stored as `NULL`.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();

    // Keys
    attributes.insert(
        keys::USER_ID.to_string(),
        AttributeValue::S(item.user_id.clone()),
    );
    attributes.insert(
        keys::ITEM_ID.to_string(),
        AttributeValue::S(item.item_id.clone()),
    );

    // Data
    for field in ITEM_FIELDS.iter().filter(|f| !f.key) {
        let value = match field.kind {
            FieldKind::String => item
                .attributes
                .string(field.name)
                .map(|s| AttributeValue::S(s.to_string())),
            FieldKind::StringList => item.attributes.list(field.name).map(|list| {
                AttributeValue::L(list.iter().cloned().map(AttributeValue::S).collect())
            }),
        };
        if let Some(value) = value {
            attributes.insert(field.name.to_string(), value);
        }
    }

    attributes
}

/// Convert a DynamoDB item to an Item.
///
/// Attributes outside `ITEM_FIELDS` are ignored.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    let mut item = Item::new(
        get_string(attributes, keys::USER_ID)?,
        get_string(attributes, keys::ITEM_ID)?,
    );

    for field in ITEM_FIELDS.iter().filter(|f| !f.key) {
        match field.kind {
            FieldKind::String => {
                if let Some(slot) = item.attributes.string_mut(field.name) {
                    *slot = get_optional_string(attributes, field.name);
                }
            }
            FieldKind::StringList => {
                if let Some(slot) = item.attributes.list_mut(field.name) {
                    *slot = get_optional_string_list(attributes, field.name)?;
                }
            }
        }
    }

    Ok(item)
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(attributes: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get an optional list-of-strings attribute.
///
/// A present attribute that is not a list of strings is invalid data.
fn get_optional_string_list(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<Vec<String>>, RepositoryError> {
    let Some(value) = attributes.get(key) else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }

    let list = value
        .as_l()
        .map_err(|_| RepositoryError::InvalidData(format!("Expected a list for field: {}", key)))?;

    list.iter()
        .map(|v| {
            v.as_s().map(|s| s.to_string()).map_err(|_| {
                RepositoryError::InvalidData(format!("Expected strings in list field: {}", key))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_core::item::ItemAttributes;

    fn sample_item() -> Item {
        Item::new("u1", "550e8400-e29b-41d4-a716-446655440003").with_attributes(ItemAttributes {
            field: Some("Experience".to_string()),
            name: Some("Acme".to_string()),
            role: Some("Engineer".to_string()),
            start_date: Some("2020-01".to_string()),
            bullet_points: Some(vec!["Built things".to_string(), "Shipped".to_string()]),
            ..Default::default()
        })
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();
        let attributes = item_to_attributes(&item);
        let parsed = attributes_to_item(&attributes).unwrap();

        assert_eq!(item, parsed);
    }

    #[test]
    fn test_item_has_key_attributes() {
        let attributes = item_to_attributes(&sample_item());

        assert_eq!(attributes.get("userId").unwrap().as_s().unwrap(), "u1");
        assert_eq!(
            attributes.get("itemId").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(
            attributes.get("field").unwrap().as_s().unwrap(),
            "Experience"
        );
    }

    #[test]
    fn test_unset_attributes_are_omitted() {
        let attributes = item_to_attributes(&Item::new("u1", "i1"));

        assert_eq!(attributes.len(), 2);
        assert!(!attributes.contains_key("summary"));
        assert!(!attributes.contains_key("bulletPoints"));
    }

    #[test]
    fn test_bullet_points_stored_as_list() {
        let attributes = item_to_attributes(&sample_item());
        let list = attributes.get("bulletPoints").unwrap().as_l().unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].as_s().unwrap(), "Built things");
    }

    #[test]
    fn test_missing_key_is_invalid_data() {
        let mut attributes = HashMap::new();
        attributes.insert("userId".to_string(), AttributeValue::S("u1".to_string()));

        let result = attributes_to_item(&attributes);
        assert_eq!(
            result,
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: itemId".to_string()
            ))
        );
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let mut attributes = item_to_attributes(&Item::new("u1", "i1"));
        attributes.insert("id".to_string(), AttributeValue::S("legacy".to_string()));

        assert_eq!(attributes_to_item(&attributes).unwrap(), Item::new("u1", "i1"));
    }

    #[test]
    fn test_null_list_reads_as_unset() {
        let mut attributes = item_to_attributes(&Item::new("u1", "i1"));
        attributes.insert("bulletPoints".to_string(), AttributeValue::Null(true));

        let item = attributes_to_item(&attributes).unwrap();
        assert_eq!(item.attributes.bullet_points, None);
    }

    #[test]
    fn test_non_string_list_is_invalid_data() {
        let mut attributes = item_to_attributes(&Item::new("u1", "i1"));
        attributes.insert(
            "bulletPoints".to_string(),
            AttributeValue::L(vec![AttributeValue::N("1".to_string())]),
        );

        assert!(matches!(
            attributes_to_item(&attributes),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
