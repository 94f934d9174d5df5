//! # Favorites
//!
//! The favorite set holds product snapshots the user has marked. It is kept
//! apart from the product collection: entries are copies taken at the time
//! they were added, so editing or deleting the product does not touch them.
//!
//! Entries are unique by id and keep insertion order for display.
//!
//! Every mutation that changes the set bumps [`FavoritesStore::revision`].
//! Views holding a rendered list compare revisions to decide whether they are
//! stale.

use crate::model::{Product, RecordId};

#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    products: Vec<Product>,
    revision: u64,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the product if an entry with its id exists, appends it
    /// otherwise. Returns whether the product is a favorite afterwards.
    pub fn toggle(&mut self, product: Product) -> bool {
        match self.products.iter().position(|p| p.id == product.id) {
            Some(index) => {
                self.products.remove(index);
                self.bump();
                false
            }
            None => {
                self.products.push(product);
                self.bump();
                true
            }
        }
    }

    /// Appends the product unless its id is already present.
    pub fn add(&mut self, product: Product) -> bool {
        if self.is_favorite(product.id) {
            return false;
        }
        self.products.push(product);
        self.bump();
        true
    }

    /// Removes every entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.products.is_empty() {
            self.products.clear();
            self.bump();
        }
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
