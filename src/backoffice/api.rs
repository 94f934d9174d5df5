//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every catalogue operation, whatever the UI.
//!
//! The facade:
//! - **Owns state**: the store, the favorites set and the configuration
//! - **Dispatches** to the matching command function
//! - **Simulates latency**: sleeps for the configured delay before each
//!   operation, standing in for the network round trip of a real backend
//!
//! It does no formatting and no printing. Business logic stays in
//! `commands/*.rs`.
//!
//! ## Record kinds
//!
//! CRUD methods are generic over the record type, so
//! `api.list::<Product>(&query)` and `api.list::<User>(&query)` share one
//! implementation:
//!
//! ```
//! use backoffice::api::BackofficeApi;
//! use backoffice::model::Product;
//! use backoffice::query::ListQuery;
//!
//! let api = BackofficeApi::seeded();
//! let page = api.list::<Product>(&ListQuery::new(1, 2).with_search("iphone")).unwrap();
//! assert_eq!(page.total, 2);
//! ```

use crate::commands;
use crate::config::{BackofficeConfig, Latency, Operation};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::{Product, Record, RecordId, RecordKind};
use crate::query::{ListQuery, Page};
use crate::store::memory::InMemoryStore;
use crate::store::{Collection, DataStore};
use std::path::Path;

/// Facade over a catalogue store. Generic over `DataStore` so callers and
/// tests can bring their own backend.
pub struct BackofficeApi<S: DataStore> {
    store: S,
    favorites: FavoritesStore,
    config: BackofficeConfig,
    latency: Latency,
}

impl BackofficeApi<InMemoryStore> {
    /// Demo catalogue, default configuration, no latency.
    pub fn seeded() -> Self {
        Self::new(InMemoryStore::seeded(), BackofficeConfig::default())
            .with_latency(Latency::none())
    }
}

impl<S: DataStore> BackofficeApi<S> {
    /// Builds the facade; latency follows `config`.
    pub fn new(store: S, config: BackofficeConfig) -> Self {
        let latency = config.latency();
        Self {
            store,
            favorites: FavoritesStore::new(),
            config,
            latency,
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn config(&self) -> &BackofficeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Records ---

    pub fn list<R: Record>(&self, query: &ListQuery) -> Result<Page<R>>
    where
        S: Collection<R>,
    {
        self.latency.pause(Operation::List);
        let result = commands::list::run::<R, S>(&self.store, query, self.config.page_size)?;
        Ok(result.page.unwrap_or_else(|| empty_page(query)))
    }

    pub fn get<R: Record>(&self, id: RecordId) -> Result<R>
    where
        S: Collection<R>,
    {
        self.latency.pause(Operation::Get);
        single(commands::get::run::<R, S>(&self.store, id)?, id)
    }

    pub fn create<R: Record>(&mut self, payload: R::New) -> Result<commands::CmdResult<R>>
    where
        S: Collection<R>,
    {
        self.latency.pause(Operation::Create);
        commands::create::run::<R, S>(&mut self.store, payload)
    }

    pub fn update<R: Record>(&mut self, patch: R::Patch) -> Result<commands::CmdResult<R>>
    where
        S: Collection<R>,
    {
        self.latency.pause(Operation::Update);
        commands::update::run::<R, S>(&mut self.store, patch)
    }

    /// Deletes a record. Favorites keep their snapshot of a deleted product
    /// unless `purge_favorites_on_delete` is set.
    pub fn delete<R: Record>(&mut self, id: RecordId) -> Result<commands::CmdResult<R>>
    where
        S: Collection<R>,
    {
        self.latency.pause(Operation::Delete);
        let mut result = commands::delete::run::<R, S>(&mut self.store, id)?;

        if R::KIND == RecordKind::Product
            && self.config.purge_favorites_on_delete
            && self.favorites.remove(id)
        {
            result.add_message(commands::CmdMessage::info(format!(
                "Product {} removed from favorites",
                id
            )));
        }
        Ok(result)
    }

    // --- Favorites ---

    pub fn toggle_favorites(&mut self, ids: &[RecordId]) -> Result<commands::CmdResult<Product>> {
        commands::favorites::toggle(&self.store, &mut self.favorites, ids)
    }

    /// Toggles one product; returns whether it is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: RecordId) -> Result<bool> {
        self.toggle_favorites(&[id])?;
        Ok(self.favorites.is_favorite(id))
    }

    pub fn add_favorite(&mut self, id: RecordId) -> Result<commands::CmdResult<Product>> {
        self.add_favorites(&[id])
    }

    pub fn remove_favorite(&mut self, id: RecordId) -> Result<commands::CmdResult<Product>> {
        self.remove_favorites(&[id])
    }

    pub fn add_favorites(&mut self, ids: &[RecordId]) -> Result<commands::CmdResult<Product>> {
        commands::favorites::add(&self.store, &mut self.favorites, ids)
    }

    pub fn remove_favorites(&mut self, ids: &[RecordId]) -> Result<commands::CmdResult<Product>> {
        commands::favorites::remove(&mut self.favorites, ids)
    }

    pub fn clear_favorites(&mut self) -> Result<commands::CmdResult<Product>> {
        commands::favorites::clear(&mut self.favorites)
    }

    pub fn list_favorites(&self) -> Result<commands::CmdResult<Product>> {
        commands::favorites::list(&self.favorites)
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    // --- Misc ---

    pub fn dashboard(&self) -> Result<commands::Summary> {
        let result = commands::dashboard::run(&self.store, &self.favorites)?;
        Ok(result.summary.unwrap_or_default())
    }

    /// Shows or changes the configuration stored in `dir`. Changes apply to
    /// facades built afterwards.
    pub fn configure(dir: &Path, action: ConfigAction) -> Result<commands::CmdResult<()>> {
        commands::config::run(dir, action)
    }
}

fn single<R: Record>(result: commands::CmdResult<R>, id: RecordId) -> Result<R> {
    result
        .into_record()
        .ok_or_else(|| crate::error::BackofficeError::not_found(R::KIND, id))
}

fn empty_page<R>(query: &ListQuery) -> Page<R> {
    Page {
        data: Vec::new(),
        total: 0,
        page: query.page,
        limit: query.limit,
        total_pages: 0,
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Summary};
