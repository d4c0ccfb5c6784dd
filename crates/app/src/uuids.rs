//! Record identifiers

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use uuid::Uuid;

/// Stable UUID of a stored record, tagged with the record type so a user id
/// cannot stand in for a product id.
///
/// The marker is `fn() -> R` so the id stays `Send + Sync + Copy` whatever the
/// record type is.
pub struct TypedUuid<R> {
    uuid: Uuid,
    record: PhantomData<fn() -> R>,
}

impl<R> TypedUuid<R> {
    /// A fresh time-ordered (v7) id.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::now_v7())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            record: PhantomData,
        }
    }

    /// The untagged value, for binding into SQL or claims.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.uuid
    }
}

impl<R> Default for TypedUuid<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: derives would demand the same traits of `R`.

impl<R> Clone for TypedUuid<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TypedUuid<R> {}

impl<R> PartialEq for TypedUuid<R> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<R> Eq for TypedUuid<R> {}

impl<R> Hash for TypedUuid<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<R> fmt::Debug for TypedUuid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

impl<R> fmt::Display for TypedUuid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}
