//! Page-number handling for paginated feeds.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("that page number is not an integer")]
    NotAnInteger,
    #[error("that page number is less than 1")]
    LessThanOne,
    #[error("page {number} is past the last page ({num_pages})")]
    Empty { number: u64, num_pages: u64 },
}

/// The `page` query parameter: a 1-based number or `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRequest {
    #[default]
    First,
    Number(u64),
    Last,
}

impl PageRequest {
    /// Absent means the first page.
    pub fn parse(raw: Option<&str>) -> Result<Self, PageError> {
        raw.map_or(Ok(PageRequest::First), str::parse)
    }
}

impl FromStr for PageRequest {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "last" {
            return Ok(PageRequest::Last);
        }
        let n: i64 = s.parse().map_err(|_| PageError::NotAnInteger)?;
        if n < 1 {
            return Err(PageError::LessThanOne);
        }
        Ok(PageRequest::Number(n as u64))
    }
}

/// A resolved page within a result set of `count` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub per_page: u64,
}

impl PageWindow {
    /// An empty result set still has one (empty) page.
    pub fn resolve(request: PageRequest, count: u64, per_page: u64) -> Result<Self, PageError> {
        let per_page = per_page.max(1);
        let num_pages = count.div_ceil(per_page).max(1);
        let number = match request {
            PageRequest::First => 1,
            PageRequest::Last => num_pages,
            PageRequest::Number(n) if n <= num_pages => n,
            PageRequest::Number(n) => {
                return Err(PageError::Empty {
                    number: n,
                    num_pages,
                });
            }
        };
        Ok(Self {
            number,
            num_pages,
            count,
            per_page,
        })
    }

    /// Zero-based page index.
    pub fn index(&self) -> u64 {
        self.number - 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(window: PageWindow, items: Vec<T>) -> Self {
        Self {
            number: window.number,
            num_pages: window.num_pages,
            count: window.count,
            has_next: window.has_next(),
            has_previous: window.has_previous(),
            items,
        }
    }
}
