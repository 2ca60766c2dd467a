//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities, backed by BSON ObjectIds.
//!
//! Path parameters are validated with [`Id::parse`] before any storage
//! call: anything that is not 24 hexadecimal characters is rejected
//! without a database round trip.

use std::fmt;
use std::marker::PhantomData;

use bson::oid::ObjectId;
use thiserror::Error;

/// Error returned when a string is not a well-formed object id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid object id: {0:?}")]
pub struct ParseIdError(pub String);

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProductId = Id<markers::Product>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: ObjectId,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID
    pub fn new() -> Self {
        Self {
            value: ObjectId::new(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing ObjectId
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self {
            value: oid,
            _marker: PhantomData,
        }
    }

    /// Parse from a 24-character hex string
    ///
    /// Fails on anything that does not satisfy the storage engine's
    /// identifier syntax (non-hex characters or wrong length).
    pub fn parse(s: &str) -> Result<Self, ParseIdError> {
        ObjectId::parse_str(s)
            .map(Self::from_object_id)
            .map_err(|_| ParseIdError(s.to_string()))
    }

    /// Get the underlying ObjectId
    pub fn as_object_id(&self) -> &ObjectId {
        &self.value
    }

    /// Convert to ObjectId
    pub fn into_object_id(self) -> ObjectId {
        self.value
    }

    /// Hex string representation (what the API exposes as `id`)
    pub fn to_hex(&self) -> String {
        self.value.to_hex()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value.to_hex())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_hex())
    }
}

impl<T> From<ObjectId> for Id<T> {
    fn from(oid: ObjectId) -> Self {
        Self::from_object_id(oid)
    }
}

impl<T> From<Id<T>> for ObjectId {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> std::str::FromStr for Id<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct User;

    /// Marker for Product IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Product;

    /// Marker for Review IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Review;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ProductId = Id<markers::Product>;
pub type ReviewId = Id<markers::Review>;
