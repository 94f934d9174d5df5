use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordPatch};
use crate::store::Collection;
use chrono::Utc;
use tracing::info;

pub fn run<R, S>(store: &mut S, patch: R::Patch) -> Result<CmdResult<R>>
where
    R: Record,
    S: Collection<R>,
{
    let id = patch.target();
    let mut record = store.find(id)?;
    record.apply(patch, Utc::now());
    store.replace(record.clone())?;

    let kind = R::KIND;
    info!(%kind, id, "updated record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} updated ({}): {}",
        kind,
        id,
        record.label()
    )));
    Ok(result.with_records(vec![record]))
}
