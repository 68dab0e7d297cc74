use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// Validated position inside a listing of `total` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub num_pages: i64,
}

impl PageWindow {
    /// Checks the requested page against the row count. An empty listing
    /// still has a valid first page; anything below 1 or past the end is 404.
    pub fn resolve(requested: Option<i64>, per_page: i64, total: i64) -> Result<Self, AppError> {
        let page = requested.unwrap_or(1);
        let num_pages = if total <= 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        if page < 1 || page > num_pages {
            return Err(AppError::NotFound(format!("Invalid page ({page})")));
        }
        Ok(PageWindow {
            page,
            per_page,
            total: total.max(0),
            num_pages,
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn into_page<T>(self, items: Vec<T>) -> Paginated<T> {
        Paginated {
            items,
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            num_pages: self.num_pages,
            has_next: self.page < self.num_pages,
            has_previous: self.page > 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub num_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}
