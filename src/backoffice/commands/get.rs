use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::Collection;

pub fn run<R, S>(store: &S, id: RecordId) -> Result<CmdResult<R>>
where
    R: Record,
    S: Collection<R>,
{
    let record = store.find(id)?;
    Ok(CmdResult::default().with_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackofficeError;
    use crate::model::{Product, RecordKind, User};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fetches_by_id() {
        let store = InMemoryStore::seeded();
        let product: Product = run(&store, 3).unwrap().into_record().unwrap();
        assert_eq!(product.title, "Samsung Universe 9");
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = InMemoryStore::seeded();
        match run::<User, _>(&store, 99) {
            Err(BackofficeError::NotFound { kind, id }) => {
                assert_eq!(kind, RecordKind::User);
                assert_eq!(id, 99);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
