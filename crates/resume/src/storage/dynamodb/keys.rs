//! DynamoDB key attributes and expressions.
//!
//! Pure functions and constants describing the table layout.
//! All functions are sync and have no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use resume_core::item::ItemKey;

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key of the table and of the field index.
pub const USER_ID: &str = "userId";
/// Sort key of the table.
pub const ITEM_ID: &str = "itemId";
/// Sort key of the field index.
pub const FIELD: &str = "field";

/// Default name of the `(userId, field)` secondary index.
pub const DEFAULT_FIELD_INDEX: &str = "user_x_field";

// ============================================================================
// Expressions
// ============================================================================

/// Placeholder bound to the user id in key conditions.
pub const USER_PLACEHOLDER: &str = ":u";
/// Placeholder bound to the field in key conditions.
pub const FIELD_PLACEHOLDER: &str = ":f";

/// Key condition selecting every item of one user.
pub const USER_CONDITION: &str = "userId = :u";

/// Name placeholder for [`FIELD`], which collides with a reserved word.
pub const FIELD_NAME_PLACEHOLDER: &str = "#f";

/// Key condition selecting one user's items in one resume section.
pub const USER_FIELD_CONDITION: &str = "userId = :u and #f = :f";

/// Condition guarding item creation.
///
/// DynamoDB evaluates it against the stored item with the same primary key,
/// so it fails exactly when `(userId, itemId)` is already taken.
pub const CREATE_CONDITION: &str =
    "attribute_not_exists(userId) AND attribute_not_exists(itemId)";

// ============================================================================
// Key maps
// ============================================================================

/// Builds the primary key attribute map for an item.
pub fn primary_key(key: &ItemKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(key.user_id.clone())),
        (ITEM_ID.to_string(), AttributeValue::S(key.item_id.clone())),
    ])
}

/// Expression values for [`USER_CONDITION`].
pub fn user_values(user_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        USER_PLACEHOLDER.to_string(),
        AttributeValue::S(user_id.to_string()),
    )])
}

/// Expression names for [`USER_FIELD_CONDITION`].
pub fn field_names() -> HashMap<String, String> {
    HashMap::from([(FIELD_NAME_PLACEHOLDER.to_string(), FIELD.to_string())])
}

/// Expression values for [`USER_FIELD_CONDITION`].
pub fn user_field_values(user_id: &str, field: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            USER_PLACEHOLDER.to_string(),
            AttributeValue::S(user_id.to_string()),
        ),
        (
            FIELD_PLACEHOLDER.to_string(),
            AttributeValue::S(field.to_string()),
        ),
    ])
}
