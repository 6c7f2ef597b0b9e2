//! Storage entity and key contracts

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A key identifying a stored entity
pub trait StorageKey: Debug + Send + Sync {
    /// String form of the key, used by storage backends
    fn as_str(&self) -> &str;
}

impl StorageKey for String {
    fn as_str(&self) -> &str {
        self
    }
}

/// An entity that can be persisted through the generic [`super::Storage`] trait
pub trait StorageEntity:
    Debug + Clone + Send + Sync + Serialize + DeserializeOwned
{
    type Key: StorageKey;

    /// The key under which this entity is stored
    fn key(&self) -> &Self::Key;

    /// Logical entity type name, used as the backing table name
    fn entity_type() -> &'static str;
}
