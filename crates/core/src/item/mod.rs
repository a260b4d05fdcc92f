mod fields;
mod operations;
mod types;

pub use fields::{field_names, FieldKind, ItemField, ITEM_FIELDS};
pub use operations::{build_item, generate_item_id};
pub use types::{Item, ItemAttributes, ItemInput, ItemKey};
