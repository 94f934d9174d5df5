//! # Command Layer
//!
//! One module per operation. Commands hold the business logic: they take a
//! store (and the favorites set where relevant), return a [`CmdResult`], and
//! never print or sleep. Presentation is the caller's job; simulated latency
//! belongs to the API facade.

use crate::config::BackofficeConfig;
use crate::query::Page;

pub mod config;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod favorites;
pub mod get;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Totals shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Summary {
    pub products: usize,
    pub users: usize,
    pub favorites: usize,
}

#[derive(Debug)]
pub struct CmdResult<R> {
    /// Records created, fetched, changed or removed by the command.
    pub records: Vec<R>,
    pub page: Option<Page<R>>,
    pub summary: Option<Summary>,
    pub config: Option<BackofficeConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            page: None,
            summary: None,
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self
    }

    pub fn with_page(mut self, page: Page<R>) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: BackofficeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The single record of a get/create/update result.
    pub fn into_record(self) -> Option<R> {
        self.records.into_iter().next()
    }
}
