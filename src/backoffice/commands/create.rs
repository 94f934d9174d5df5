use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::Collection;
use chrono::Utc;
use tracing::info;

pub fn run<R, S>(store: &mut S, payload: R::New) -> Result<CmdResult<R>>
where
    R: Record,
    S: Collection<R>,
{
    let id = store.next_id();
    let record = R::build(id, payload, Utc::now());
    store.insert(record.clone())?;

    let kind = R::KIND;
    info!(%kind, id, "created record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} created ({}): {}",
        kind,
        id,
        record.label()
    )));
    Ok(result.with_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::form::{ProductForm, UserForm};
    use crate::model::{NewProduct, Product, User};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn assigns_next_id_and_timestamps() {
        let mut store = StoreFixture::new().phones().store;
        let payload = ProductForm::sample().into_new_product();

        let before = Utc::now();
        let created: Product = run(&mut store, payload.clone()).unwrap().into_record().unwrap();

        assert_eq!(created.id, 4);
        assert!(created.created_at >= before);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.title, payload.title);
    }

    #[test]
    fn first_record_in_empty_store_gets_id_one() {
        let mut store = InMemoryStore::new();
        let created: User = run(&mut store, UserForm::sample().into_new_user())
            .unwrap()
            .into_record()
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn created_record_round_trips_through_get() {
        let mut store = InMemoryStore::seeded();
        let payload: NewProduct = ProductForm::sample().into_new_product();
        let created: Product = run(&mut store, payload.clone()).unwrap().into_record().unwrap();

        let fetched: Product = get::run(&store, created.id).unwrap().into_record().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.id, 6);
        assert_eq!(fetched.brand, payload.brand);
        assert_eq!(fetched.images, payload.images);
    }

    #[test]
    fn reports_success_message() {
        let mut store = InMemoryStore::new();
        let result: CmdResult<Product> =
            run(&mut store, ProductForm::sample().into_new_product()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("Product created (1)"));
    }
}
