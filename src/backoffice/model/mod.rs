//! # Domain Model
//!
//! Two record types live in the catalogue: [`Product`] and [`User`]. Both share
//! the same lifecycle, captured by the [`Record`] trait:
//!
//! - Created from a payload without id or timestamps ([`Record::New`])
//! - Identified by a numeric [`RecordId`], unique within its collection
//! - Updated through a patch carrying the target id ([`Record::Patch`]);
//!   fields absent from the patch keep their value, nested objects are
//!   replaced wholesale
//!
//! JSON uses camelCase keys (`discountPercentage`, `createdAt`) so payloads
//! written for the dashboard front-end deserialize unchanged.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

mod product;
mod user;

pub use product::{NewProduct, Product, ProductPatch, RatingTier, StockLevel};
pub use user::{Address, Bank, Company, Coordinates, Gender, Hair, NewUser, User, UserPatch};

pub type RecordId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Product,
    User,
}

impl RecordKind {
    pub fn plural(&self) -> &'static str {
        match self {
            RecordKind::Product => "products",
            RecordKind::User => "users",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Product => write!(f, "Product"),
            RecordKind::User => write!(f, "User"),
        }
    }
}

/// A record stored in one of the catalogue collections.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Creation payload: every field except id and timestamps.
    type New: fmt::Debug + DeserializeOwned;
    /// Partial update payload, carrying the id of the record it targets.
    type Patch: RecordPatch;

    const KIND: RecordKind;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    /// Builds a stored record, stamping both timestamps with `now`.
    fn build(id: RecordId, payload: Self::New, now: DateTime<Utc>) -> Self;

    /// Shallow-merges `patch` over `self` and refreshes `updated_at`.
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Short human label used in messages (product title, user full name).
    fn label(&self) -> String;
}

pub trait RecordPatch: fmt::Debug + DeserializeOwned {
    fn target(&self) -> RecordId;

    /// Points the patch at another record. Used when the id comes from the
    /// route rather than the payload.
    fn retarget(&mut self, id: RecordId);
}

/// Replaces `slot` when the patch carries a value for it.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_and_plural() {
        assert_eq!(RecordKind::Product.to_string(), "Product");
        assert_eq!(RecordKind::User.plural(), "users");
    }

    #[test]
    fn merge_only_overwrites_present_values() {
        let mut price = 10.0;
        merge(&mut price, None);
        assert_eq!(price, 10.0);
        merge(&mut price, Some(12.5));
        assert_eq!(price, 12.5);
    }
}
