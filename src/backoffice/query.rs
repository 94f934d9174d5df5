//! # List Queries
//!
//! A [`ListQuery`] describes the slice of a collection a list view wants: a
//! 1-based page, a page size and an optional free-text search. [`run_query`]
//! filters first, then paginates, and reports the filtered total so the view
//! can render its pager.
//!
//! Search is a case-insensitive substring match over the fields each record
//! type exposes through [`Record::search_fields`]. A record matches when any
//! one field contains the term.

use crate::model::Record;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(default)]
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl ListQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replaces zero values: page `0` reads as the first page and limit `0`
    /// falls back to `default_limit`.
    pub fn normalized(&self, default_limit: usize) -> Self {
        Self {
            page: self.page.max(1),
            limit: if self.limit == 0 {
                default_limit.max(1)
            } else {
                self.limit
            },
            search: self.search.clone(),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<R> {
    pub data: Vec<R>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl<R> Page<R> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<T>(self, f: impl FnMut(R) -> T) -> Page<T> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Returns true when `record` matches the already lowercased `term`.
pub fn matches<R: Record>(record: &R, term: &str) -> bool {
    term.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(term))
}

/// Filters `records` by the query's search term and returns the requested page.
///
/// `query` must already be normalized: a zero limit yields zero total pages.
pub fn run_query<R: Record>(records: Vec<R>, query: &ListQuery) -> Page<R> {
    // Blank terms match everything; otherwise the raw term, spaces included.
    let term = if query.search.trim().is_empty() {
        String::new()
    } else {
        query.search.to_lowercase()
    };
    let filtered: Vec<R> = if term.is_empty() {
        records
    } else {
        records
            .into_iter()
            .filter(|record| matches(record, &term))
            .collect()
    };

    let total = filtered.len();
    let data: Vec<R> = filtered
        .into_iter()
        .skip(query.offset())
        .take(query.limit)
        .collect();

    Page {
        data,
        total,
        page: query.page,
        limit: query.limit,
        total_pages: if query.limit == 0 {
            0
        } else {
            total.div_ceil(query.limit)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, RecordId};
    use crate::store::memory::fixtures::product;
    use crate::store::seed;

    fn phones() -> Vec<Product> {
        vec![
            product(1, "iPhone 9", "Apple"),
            product(2, "iPhone X", "Apple"),
            product(3, "Samsung Universe 9", "Samsung"),
        ]
    }

    fn ids(page: &Page<Product>) -> Vec<RecordId> {
        page.data.iter().map(|p| p.id).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let page = run_query(phones(), &ListQuery::new(1, 2).with_search("iphone"));
        assert_eq!(ids(&page), vec![1, 2]);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn second_page_of_unfiltered_list() {
        let page = run_query(phones(), &ListQuery::new(2, 2));
        assert_eq!(ids(&page), vec![3]);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next());
    }

    #[test]
    fn empty_search_counts_everything() {
        let page = run_query(phones(), &ListQuery::new(1, 10));
        assert_eq!(page.total, 3);
    }

    #[test]
    fn search_matches_brand() {
        let page = run_query(phones(), &ListQuery::new(1, 10).with_search("SAMSUNG"));
        assert_eq!(ids(&page), vec![3]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let page = run_query(phones(), &ListQuery::new(1, 10).with_search("   "));
        assert_eq!(page.total, 3);
    }

    #[test]
    fn surrounding_spaces_are_part_of_a_non_blank_term() {
        let bare = run_query(seed::products(), &ListQuery::new(1, 10).with_search("9"));
        assert_eq!(ids(&bare), vec![1, 2, 3]);

        let padded = run_query(seed::products(), &ListQuery::new(1, 10).with_search("9 "));
        assert_eq!(padded.total, 0);
    }

    #[test]
    fn out_of_range_page_is_empty_with_totals() {
        let page = run_query(phones(), &ListQuery::new(5, 2));
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_length_follows_formula() {
        let records: Vec<Product> = (1..=23)
            .map(|id| product(id, &format!("Item {}", id), "Acme"))
            .collect();

        for limit in 1..=7usize {
            for page in 1..=6usize {
                let result = run_query(records.clone(), &ListQuery::new(page, limit));
                let remaining = result.total.saturating_sub((page - 1) * limit);
                assert_eq!(result.data.len(), limit.min(remaining));
                if let Some(first) = result.data.first() {
                    assert_eq!(first.id as usize, (page - 1) * limit + 1);
                }
            }
        }
    }

    #[test]
    fn normalized_replaces_zeroes() {
        let q = ListQuery::new(0, 0).normalized(DEFAULT_PAGE_SIZE);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);

        let q = ListQuery::new(3, 4).normalized(DEFAULT_PAGE_SIZE);
        assert_eq!((q.page, q.limit), (3, 4));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let page = run_query(phones(), &ListQuery::new(usize::MAX, usize::MAX));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = run_query(phones(), &ListQuery::new(1, 2)).map(|p| p.id);
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.total, 3);
    }
}
