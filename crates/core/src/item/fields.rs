//! The shared Item attribute list.
//!
//! One constant describes every attribute of an `Item`. Storage conversions
//! iterate it, and the GraphQL `Item` / `InputItem` types are checked against
//! it, so the output shape, the input shape and the stored shape cannot drift.

/// The value shape of an Item attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single string.
    String,
    /// An ordered list of strings.
    StringList,
}

/// A named Item attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemField {
    /// Attribute name as stored and as exposed over GraphQL.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Part of the table's primary key.
    pub key: bool,
}

const fn string(name: &'static str) -> ItemField {
    ItemField {
        name,
        kind: FieldKind::String,
        key: false,
    }
}

const fn key(name: &'static str) -> ItemField {
    ItemField {
        name,
        kind: FieldKind::String,
        key: true,
    }
}

/// Every attribute of an Item, key attributes first.
pub const ITEM_FIELDS: &[ItemField] = &[
    key("userId"),
    key("itemId"),
    string("field"),
    string("summary"),
    string("name"),
    string("role"),
    string("phoneNumber"),
    string("website"),
    string("email"),
    string("location"),
    string("startDate"),
    string("endDate"),
    string("award"),
    ItemField {
        name: "bulletPoints",
        kind: FieldKind::StringList,
        key: false,
    },
    string("additionalInfo"),
];

/// Names of all Item attributes, in declaration order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    ITEM_FIELDS.iter().map(|f| f.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<&str> = field_names().collect();
        assert_eq!(names.len(), ITEM_FIELDS.len());
    }

    #[test]
    fn test_key_fields() {
        let keys: Vec<&str> = ITEM_FIELDS
            .iter()
            .filter(|f| f.key)
            .map(|f| f.name)
            .collect();
        assert_eq!(keys, vec!["userId", "itemId"]);
    }

    #[test]
    fn test_only_bullet_points_is_a_list() {
        let lists: Vec<&str> = ITEM_FIELDS
            .iter()
            .filter(|f| f.kind == FieldKind::StringList)
            .map(|f| f.name)
            .collect();
        assert_eq!(lists, vec!["bulletPoints"]);
    }
}
