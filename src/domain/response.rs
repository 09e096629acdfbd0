use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::params::{CursorParams, PageParams};
use crate::domain::value::{PageNumber, PageSize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Single-resource response body: `{"data": {...}}`.
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Number-paginated list body: `{"data": [...], "meta": {...}}`.
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> Page<T> {
    /// Whether `meta` reports a page after this one.
    pub fn has_next_page(&self) -> bool {
        match self.meta {
            Some(PageMeta {
                page_number: Some(number),
                total_pages: Some(total),
                ..
            }) => number < total,
            _ => false,
        }
    }

    /// Page params selecting the following page, keeping the current page size.
    pub fn next_page_params(&self) -> Option<PageParams> {
        if !self.has_next_page() {
            return None;
        }
        let meta = self.meta?;
        let number = PageNumber::new(meta.page_number?).ok()?.next();
        let size = meta.page_size.and_then(|size| PageSize::new(size).ok());
        Some(PageParams {
            number: Some(number),
            size,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CursorMeta {
    #[serde(default)]
    pub cursors: Cursors,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Cursor-paginated list body.
pub struct CursorPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<CursorMeta>,
}

impl<T> CursorPage<T> {
    /// Cursor params for the following page when the server returned an `after` cursor.
    pub fn next_page_params(&self) -> Option<CursorParams> {
        let after = self.meta.as_ref()?.cursors.after.clone()?;
        Some(CursorParams::after(after))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ErrorSource {
    #[serde(default)]
    pub pointer: Option<String>,
    #[serde(default)]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// One entry of an error body: `{"errors": [{"code": "10007", "title": ..., "detail": ...}]}`.
pub struct ApiErrorDetail {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub source: Option<ErrorSource>,
    #[serde(default)]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Body of endpoints that only acknowledge an action: `{"data": {"result": "ok"}}`.
pub struct ActionResult {
    pub result: String,
}
