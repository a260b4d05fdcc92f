use serde::{Deserialize, Serialize};

/// Primary key of an Item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemKey {
    pub user_id: String,
    pub item_id: String,
}

impl ItemKey {
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
        }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.user_id, self.item_id)
    }
}

/// The non-key attributes of a resume item.
///
/// Every attribute is optional; an update overwrites all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAttributes {
    /// Resume section this item belongs to (e.g. "Experience", "Skills").
    pub field: Option<String>,
    pub summary: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub award: Option<String>,
    pub bullet_points: Option<Vec<String>>,
    pub additional_info: Option<String>,
}

impl ItemAttributes {
    /// Returns the string attribute with the given stored name.
    ///
    /// Returns `None` when the attribute is unset or is not a string attribute.
    pub fn string(&self, name: &str) -> Option<&str> {
        match name {
            "field" => self.field.as_deref(),
            "summary" => self.summary.as_deref(),
            "name" => self.name.as_deref(),
            "role" => self.role.as_deref(),
            "phoneNumber" => self.phone_number.as_deref(),
            "website" => self.website.as_deref(),
            "email" => self.email.as_deref(),
            "location" => self.location.as_deref(),
            "startDate" => self.start_date.as_deref(),
            "endDate" => self.end_date.as_deref(),
            "award" => self.award.as_deref(),
            "additionalInfo" => self.additional_info.as_deref(),
            _ => None,
        }
    }

    /// Mutable slot for the string attribute with the given stored name.
    pub fn string_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "field" => Some(&mut self.field),
            "summary" => Some(&mut self.summary),
            "name" => Some(&mut self.name),
            "role" => Some(&mut self.role),
            "phoneNumber" => Some(&mut self.phone_number),
            "website" => Some(&mut self.website),
            "email" => Some(&mut self.email),
            "location" => Some(&mut self.location),
            "startDate" => Some(&mut self.start_date),
            "endDate" => Some(&mut self.end_date),
            "award" => Some(&mut self.award),
            "additionalInfo" => Some(&mut self.additional_info),
            _ => None,
        }
    }

    /// Returns the list attribute with the given stored name.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        match name {
            "bulletPoints" => self.bullet_points.as_deref(),
            _ => None,
        }
    }

    /// Mutable slot for the list attribute with the given stored name.
    pub fn list_mut(&mut self, name: &str) -> Option<&mut Option<Vec<String>>> {
        match name {
            "bulletPoints" => Some(&mut self.bullet_points),
            _ => None,
        }
    }
}

/// A resume item owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub user_id: String,
    pub item_id: String,
    #[serde(flatten)]
    pub attributes: ItemAttributes,
}

impl Item {
    /// Creates an item with no attributes set.
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            attributes: ItemAttributes::default(),
        }
    }

    /// Sets the attributes of this item.
    pub fn with_attributes(mut self, attributes: ItemAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns the primary key of this item.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.user_id.clone(), self.item_id.clone())
    }
}

/// Caller-supplied item data from a create or update mutation.
///
/// `user_id` is carried for shape parity with `Item` but is never trusted:
/// mutations always take the owner from the caller's claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub user_id: Option<String>,
    pub item_id: Option<String>,
    #[serde(flatten)]
    pub attributes: ItemAttributes,
}
