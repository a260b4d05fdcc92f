mod codes;
mod error;
mod traits;

pub use codes::{repository_error_code, CONFLICT, STORAGE_ERROR};
pub use error::{RepositoryError, Result};
pub use traits::ItemRepository;
