//! # Storage Layer
//!
//! The catalogue keeps one ordered collection per record type. Storage is
//! abstracted behind the [`Collection`] trait so commands are written once,
//! generically over the record type, and tested against a fresh store each
//! time.
//!
//! A [`DataStore`] is anything holding both collections. The only backend is
//! [`memory::InMemoryStore`]: state lives in the process and is gone on exit.
//!
//! ## Ordering
//!
//! Collections preserve insertion order. List queries paginate over that
//! order, so a record created last always lands on the last page.

use crate::error::Result;
use crate::model::{Product, Record, RecordId, User};

pub mod memory;
pub mod seed;

/// Ordered storage for one record type.
pub trait Collection<R: Record> {
    /// Snapshot of every record, in insertion order.
    fn all(&self) -> Result<Vec<R>>;

    /// Get a record by id. Fails with `NotFound` when absent.
    fn find(&self, id: RecordId) -> Result<R>;

    /// Append a new record.
    fn insert(&mut self, record: R) -> Result<()>;

    /// Replace the stored record with the same id, keeping its position.
    fn replace(&mut self, record: R) -> Result<()>;

    /// Remove a record by id, returning it.
    fn remove(&mut self, id: RecordId) -> Result<R>;

    /// Highest id currently stored.
    fn max_id(&self) -> Option<RecordId>;

    /// Id for the next record: one past the highest id this collection has
    /// ever held, so ids freed by a delete are not handed out again. An
    /// empty, never-used collection starts at 1.
    fn next_id(&self) -> RecordId;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A store that holds the whole catalogue.
pub trait DataStore: Collection<Product> + Collection<User> {}

impl<T: Collection<Product> + Collection<User>> DataStore for T {}
