use super::{seed, Collection};
use crate::error::{BackofficeError, Result};
use crate::model::{Product, Record, RecordId, User};

/// Ordered rows of one record type.
#[derive(Debug, Clone)]
struct Table<R> {
    rows: Vec<R>,
    // Highest id ever stored, including removed rows.
    high_water: RecordId,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            high_water: 0,
        }
    }
}

impl<R: Record> Table<R> {
    fn from_rows(rows: Vec<R>) -> Self {
        let high_water = rows.iter().map(Record::id).max().unwrap_or(0);
        Self { rows, high_water }
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| BackofficeError::not_found(R::KIND, id))
    }

    fn find(&self, id: RecordId) -> Result<R> {
        self.position(id).map(|i| self.rows[i].clone())
    }

    fn insert(&mut self, record: R) -> Result<()> {
        if self.rows.iter().any(|r| r.id() == record.id()) {
            return Err(BackofficeError::Store(format!(
                "{} {} already exists",
                R::KIND,
                record.id()
            )));
        }
        self.high_water = self.high_water.max(record.id());
        self.rows.push(record);
        Ok(())
    }

    fn replace(&mut self, record: R) -> Result<()> {
        let index = self.position(record.id())?;
        self.rows[index] = record;
        Ok(())
    }

    fn remove(&mut self, id: RecordId) -> Result<R> {
        let index = self.position(id)?;
        Ok(self.rows.remove(index))
    }

    fn max_id(&self) -> Option<RecordId> {
        self.rows.iter().map(Record::id).max()
    }

    fn next_id(&self) -> RecordId {
        self.max_id().unwrap_or(0).max(self.high_water) + 1
    }
}

/// In-memory catalogue. Does NOT persist data.
///
/// Constructed explicitly and handed to the API, so every test (and every
/// CLI invocation) starts from its own state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    products: Table<Product>,
    users: Table<User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the demo catalogue.
    pub fn seeded() -> Self {
        Self::with_records(seed::products(), seed::users())
    }

    pub fn with_records(products: Vec<Product>, users: Vec<User>) -> Self {
        Self {
            products: Table::from_rows(products),
            users: Table::from_rows(users),
        }
    }
}

macro_rules! table_collection {
    ($record:ty, $field:ident) => {
        impl Collection<$record> for InMemoryStore {
            fn all(&self) -> Result<Vec<$record>> {
                Ok(self.$field.rows.clone())
            }

            fn find(&self, id: RecordId) -> Result<$record> {
                self.$field.find(id)
            }

            fn insert(&mut self, record: $record) -> Result<()> {
                self.$field.insert(record)
            }

            fn replace(&mut self, record: $record) -> Result<()> {
                self.$field.replace(record)
            }

            fn remove(&mut self, id: RecordId) -> Result<$record> {
                self.$field.remove(id)
            }

            fn max_id(&self) -> Option<RecordId> {
                self.$field.max_id()
            }

            fn next_id(&self) -> RecordId {
                self.$field.next_id()
            }

            fn len(&self) -> usize {
                self.$field.rows.len()
            }
        }
    };
}

table_collection!(Product, products);
table_collection!(User, users);

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::Utc;

    /// A minimal product with the given searchable fields.
    pub fn product(id: RecordId, title: &str, brand: &str) -> Product {
        let now = Utc::now();
        Product {
            id,
            title: title.to_string(),
            description: format!("{} by {}", title, brand),
            price: 100.0,
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 10,
            brand: brand.to_string(),
            category: "smartphones".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A copy of the first seeded user with a new id and name.
    pub fn user(id: RecordId, first_name: &str, last_name: &str) -> User {
        let mut user = seed::users().remove(0);
        user.id = id;
        user.first_name = first_name.to_string();
        user.last_name = last_name.to_string();
        user.username = format!("{}{}", first_name, last_name).to_lowercase();
        user.email = format!("{}.{}@example.com", first_name, last_name).to_lowercase();
        user
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, id: RecordId, title: &str, brand: &str) -> Self {
            self.store.insert(product(id, title, brand)).unwrap();
            self
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = Collection::<Product>::next_id(&self.store);
                let title = format!("Test Product {}", i + 1);
                self.store.insert(product(id, &title, "Acme")).unwrap();
            }
            self
        }

        pub fn with_user(mut self, id: RecordId, first_name: &str, last_name: &str) -> Self {
            self.store.insert(user(id, first_name, last_name)).unwrap();
            self
        }

        /// The three phones used throughout the query examples.
        pub fn phones(self) -> Self {
            self.with_product(1, "iPhone 9", "Apple")
                .with_product(2, "iPhone X", "Apple")
                .with_product(3, "Samsung Universe 9", "Samsung")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{product, StoreFixture};
    use super::*;

    #[test]
    fn find_missing_is_not_found() {
        let store = InMemoryStore::new();
        match Collection::<Product>::find(&store, 42) {
            Err(BackofficeError::NotFound { kind, id }) => {
                assert_eq!(kind, crate::model::RecordKind::Product);
                assert_eq!(id, 42);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = Collection::<User>::remove(&mut store, 9).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut store = StoreFixture::new().phones().store;
        let titles: Vec<String> = Collection::<Product>::all(&store)
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["iPhone 9", "iPhone X", "Samsung Universe 9"]);

        assert!(store.insert(product(2, "Dup", "Acme")).is_err());
        assert_eq!(Collection::<Product>::len(&store), 3);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = StoreFixture::new().phones().store;
        let mut middle = Collection::<Product>::find(&store, 2).unwrap();
        middle.title = "iPhone XS".into();
        store.replace(middle).unwrap();

        let all = Collection::<Product>::all(&store).unwrap();
        assert_eq!(all[1].title, "iPhone XS");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn collections_are_independent() {
        let store = StoreFixture::new()
            .with_products(2)
            .with_user(1, "Ada", "Lovelace")
            .store;
        assert_eq!(Collection::<Product>::len(&store), 2);
        assert_eq!(Collection::<User>::len(&store), 1);
        assert_eq!(Collection::<Product>::max_id(&store), Some(2));
        assert_eq!(Collection::<User>::max_id(&store), Some(1));
    }

    #[test]
    fn next_id_starts_at_one_and_never_reuses() {
        let mut store = InMemoryStore::new();
        assert_eq!(Collection::<Product>::next_id(&store), 1);

        store.insert(product(1, "A", "Acme")).unwrap();
        store.insert(product(2, "B", "Acme")).unwrap();
        assert_eq!(Collection::<Product>::next_id(&store), 3);

        Collection::<Product>::remove(&mut store, 2).unwrap();
        assert_eq!(Collection::<Product>::max_id(&store), Some(1));
        assert_eq!(Collection::<Product>::next_id(&store), 3);

        Collection::<Product>::remove(&mut store, 1).unwrap();
        assert_eq!(Collection::<Product>::next_id(&store), 3);
    }

    #[test]
    fn seeded_store_has_demo_catalogue() {
        let store = InMemoryStore::seeded();
        assert_eq!(Collection::<Product>::len(&store), 5);
        assert_eq!(Collection::<User>::len(&store), 2);
        assert!(Collection::<User>::is_empty(&InMemoryStore::new()));
    }
}
