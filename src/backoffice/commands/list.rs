use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::query::{run_query, ListQuery};
use crate::store::Collection;
use tracing::debug;

pub fn run<R, S>(store: &S, query: &ListQuery, default_limit: usize) -> Result<CmdResult<R>>
where
    R: Record,
    S: Collection<R>,
{
    let query = query.normalized(default_limit);
    let records = store.all()?;
    let page = run_query(records, &query);

    let kind = R::KIND;
    debug!(
        %kind,
        page = query.page,
        limit = query.limit,
        search = %query.search,
        total = page.total,
        "listed records"
    );

    Ok(CmdResult::default().with_page(page))
}
