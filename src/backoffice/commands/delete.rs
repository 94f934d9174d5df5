use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::Collection;
use tracing::info;

pub fn run<R, S>(store: &mut S, id: RecordId) -> Result<CmdResult<R>>
where
    R: Record,
    S: Collection<R>,
{
    let removed = store.remove(id)?;

    let kind = R::KIND;
    info!(%kind, id, "deleted record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} deleted ({}): {}",
        kind,
        id,
        removed.label()
    )));
    Ok(result.with_records(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, get};
    use crate::form::ProductForm;
    use crate::model::{Product, User};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deleted_record_is_gone() {
        let mut store = InMemoryStore::seeded();
        run::<Product, _>(&mut store, 2).unwrap();

        let err = get::run::<Product, _>(&store, 2).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(crate::store::Collection::<Product>::len(&store), 4);
    }

    #[test]
    fn deleting_twice_is_not_found() {
        let mut store = InMemoryStore::seeded();
        run::<User, _>(&mut store, 1).unwrap();
        assert!(run::<User, _>(&mut store, 1).unwrap_err().is_not_found());
    }

    #[test]
    fn ids_are_not_reused_after_deleting_the_last_record() {
        let mut store = InMemoryStore::seeded();
        run::<Product, _>(&mut store, 5).unwrap();

        let created: Product = create::run(&mut store, ProductForm::sample().into_new_product())
            .unwrap()
            .into_record()
            .unwrap();
        assert_eq!(created.id, 6);
    }
}
