//! Pagination extractor
//!
//! Extracts page/size pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use petplace_core::traits::PageQuery;
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_SIZE: u32 = 20;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Zero-based page index
    #[serde(default)]
    pub page: Option<u32>,
    /// Number of items per page
    #[serde(default)]
    pub size: Option<u32>,
}

/// Validated pagination extractor wrapping [`PageQuery`]
///
/// `PageQuery::new` clamps the size to the repository maximum.
#[derive(Debug, Clone)]
pub struct Page(pub PageQuery);

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page(PageQuery::new(
            params.page.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_SIZE),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Page::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Page::from(PageParams {
            page: None,
            size: None,
        });
        assert_eq!(page.0.page, 0);
        assert_eq!(page.0.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_size_clamping() {
        let page = Page::from(PageParams {
            page: Some(2),
            size: Some(10_000),
        });
        assert_eq!(page.0.page, 2);
        assert!(page.0.size <= 100);
    }
}
