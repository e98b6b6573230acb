//! Infrastructure layer.

pub mod storage;

pub use self::storage::Storage;
#[cfg(feature = "json")]
pub use self::storage::{json, Json, Memory};
