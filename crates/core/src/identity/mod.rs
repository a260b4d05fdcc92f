mod error;
mod functions;
mod types;

pub use error::IdentityError;
pub use functions::{require_user_id, resolve_user_id};
pub use types::{Claims, Identity, NAME_CLAIM, SUBJECT_CLAIM, USERNAME_CLAIM};
