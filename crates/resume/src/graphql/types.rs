//! GraphQL shape of an Item.
//!
//! One struct derives both the `Item` output type and the `InputItem` input
//! type, so the two can never disagree. Field order and names follow
//! `resume_core::item::ITEM_FIELDS`.

use async_graphql::{InputObject, SimpleObject};
use resume_core::item::{Item, ItemAttributes, ItemInput, ItemKey};

/// A resume item.
#[derive(Debug, Clone, Default, PartialEq, Eq, SimpleObject, InputObject)]
#[graphql(name = "Item", input_name = "InputItem")]
pub struct ItemObject {
    pub user_id: Option<String>,
    pub item_id: Option<String>,
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

impl From<Item> for ItemObject {
    fn from(item: Item) -> Self {
        let Item {
            user_id,
            item_id,
            attributes,
        } = item;
        let ItemAttributes {
            field,
            summary,
            name,
            role,
            phone_number,
            website,
            email,
            location,
            start_date,
            end_date,
            award,
            bullet_points,
            additional_info,
        } = attributes;

        Self {
            user_id: Some(user_id),
            item_id: Some(item_id),
            field,
            summary,
            name,
            role,
            phone_number,
            website,
            email,
            location,
            start_date,
            end_date,
            award,
            bullet_points,
            additional_info,
        }
    }
}

/// A deleted item is reported by its key alone.
impl From<ItemKey> for ItemObject {
    fn from(key: ItemKey) -> Self {
        Self {
            user_id: Some(key.user_id),
            item_id: Some(key.item_id),
            ..Default::default()
        }
    }
}

impl From<ItemObject> for ItemInput {
    fn from(object: ItemObject) -> Self {
        Self {
            user_id: object.user_id,
            item_id: object.item_id,
            attributes: ItemAttributes {
                field: object.field,
                summary: object.summary,
                name: object.name,
                role: object.role,
                phone_number: object.phone_number,
                website: object.website,
                email: object.email,
                location: object.location,
                start_date: object.start_date,
                end_date: object.end_date,
                award: object.award,
                bullet_points: object.bullet_points,
                additional_info: object.additional_info,
            },
        }
    }
}
