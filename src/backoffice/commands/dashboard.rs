use crate::commands::{CmdResult, Summary};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::{Product, User};
use crate::store::{Collection, DataStore};

pub fn run<S: DataStore>(store: &S, favorites: &FavoritesStore) -> Result<CmdResult<()>> {
    let summary = Summary {
        products: Collection::<Product>::len(store),
        users: Collection::<User>::len(store),
        favorites: favorites.len(),
    };
    Ok(CmdResult::default().with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::product;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn counts_everything() {
        let store = InMemoryStore::seeded();
        let mut favs = FavoritesStore::new();
        favs.add(product(1, "iPhone 9", "Apple"));

        let summary = run(&store, &favs).unwrap().summary.unwrap();
        assert_eq!(
            summary,
            Summary {
                products: 5,
                users: 2,
                favorites: 1
            }
        );
    }

    #[test]
    fn empty_store() {
        let summary = run(&InMemoryStore::new(), &FavoritesStore::new())
            .unwrap()
            .summary
            .unwrap();
        assert_eq!(summary, Summary::default());
    }
}
