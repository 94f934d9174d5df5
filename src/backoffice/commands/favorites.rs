use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::{Product, RecordId};
use crate::store::Collection;
use tracing::info;

pub fn toggle<S: Collection<Product>>(
    store: &S,
    favorites: &mut FavoritesStore,
    ids: &[RecordId],
) -> Result<CmdResult<Product>> {
    let products = lookup(store, ids)?;
    let mut result = CmdResult::default();

    for product in products {
        let title = product.title.clone();
        let id = product.id;
        let now_favorite = favorites.toggle(product.clone());
        info!(id, now_favorite, "toggled favorite");

        let verb = if now_favorite { "added to" } else { "removed from" };
        result.add_message(CmdMessage::success(format!(
            "Product {} favorites ({}): {}",
            verb, id, title
        )));
        result.records.push(product);
    }

    Ok(result)
}

pub fn add<S: Collection<Product>>(
    store: &S,
    favorites: &mut FavoritesStore,
    ids: &[RecordId],
) -> Result<CmdResult<Product>> {
    let products = lookup(store, ids)?;
    let mut result = CmdResult::default();

    for product in products {
        let message = if favorites.add(product.clone()) {
            info!(id = product.id, "added favorite");
            CmdMessage::success(format!(
                "Product added to favorites ({}): {}",
                product.id, product.title
            ))
        } else {
            CmdMessage::info(format!(
                "Product already in favorites ({}): {}",
                product.id, product.title
            ))
        };
        result.add_message(message);
        result.records.push(product);
    }

    Ok(result)
}

/// Removes favorites by id. Does not consult the product collection, so
/// favorites of deleted products can still be removed.
pub fn remove(favorites: &mut FavoritesStore, ids: &[RecordId]) -> Result<CmdResult<Product>> {
    let mut result = CmdResult::default();

    for &id in ids {
        let entry = favorites.products().iter().find(|p| p.id == id).cloned();
        match entry {
            Some(product) => {
                favorites.remove(id);
                info!(id, "removed favorite");
                result.add_message(CmdMessage::success(format!(
                    "Product removed from favorites ({}): {}",
                    id, product.title
                )));
                result.records.push(product);
            }
            None => result.add_message(CmdMessage::warning(format!(
                "Product {} is not in favorites",
                id
            ))),
        }
    }

    Ok(result)
}

pub fn clear(favorites: &mut FavoritesStore) -> Result<CmdResult<Product>> {
    let count = favorites.len();
    favorites.clear();
    info!(count, "cleared favorites");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} favorite(s)",
        count
    )));
    Ok(result)
}

pub fn list(favorites: &FavoritesStore) -> Result<CmdResult<Product>> {
    Ok(CmdResult::default().with_records(favorites.products().to_vec()))
}

// Resolve every id before touching the favorites so a bad id leaves them unchanged.
fn lookup<S: Collection<Product>>(store: &S, ids: &[RecordId]) -> Result<Vec<Product>> {
    ids.iter().map(|&id| store.find(id)).collect()
}
