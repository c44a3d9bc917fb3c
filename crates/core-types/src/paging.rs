use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(CoreError::InvalidInput(
                "sort direction".to_string(),
                format!("expected 'asc' or 'desc', got '{}'", other),
            )),
        }
    }
}

/// Ordering of a page on a single property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(property: impl Into<String>) -> Self {
        Self { property: property.into(), direction: Direction::Asc }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self { property: property.into(), direction: Direction::Desc }
    }
}

/// Parses the `property[,direction]` query form, e.g. `name,desc`.
impl FromStr for Sort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let property = parts.next().unwrap_or_default().trim();
        if property.is_empty() {
            return Err(CoreError::InvalidInput(
                "sort".to_string(),
                "property must not be empty".to_string(),
            ));
        }
        let direction = match parts.next() {
            Some(d) => d.parse()?,
            None => Direction::Asc,
        };
        Ok(Self { property: property.to_string(), direction })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        write!(f, "{},{}", self.property, dir)
    }
}

/// A request for one zero-based page of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, CoreError> {
        if size == 0 {
            return Err(CoreError::InvalidInput(
                "page size".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        Ok(Self { page, size, sort: None })
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of records to skip before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of records plus the metadata needed to draw pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size.max(1));
        let total_pages = total_elements.div_ceil(size);
        let number = request.page;
        Self {
            content,
            number,
            size: request.size,
            total_elements,
            total_pages,
            first: number == 0,
            last: u64::from(number) + 1 >= total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_metadata_for_partial_last_page() {
        let request = PageRequest::new(2, 2).unwrap();
        let page = Page::new(vec!["e"], &request, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.content.len(), 1);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn empty_store_yields_single_first_and_last_page() {
        let request = PageRequest::new(0, 10).unwrap();
        let page: Page<u8> = Page::new(vec![], &request, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PageRequest::new(0, 0).is_err());
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(3, 20).unwrap().offset(), 60);
    }

    #[test]
    fn parses_sort_query_form() {
        assert_eq!("name,desc".parse::<Sort>().unwrap(), Sort::desc("name"));
        assert_eq!("colour".parse::<Sort>().unwrap(), Sort::asc("colour"));
        assert_eq!(" id , ASC ".parse::<Sort>().unwrap(), Sort::asc("id"));
        assert!("name,sideways".parse::<Sort>().is_err());
        assert!(",desc".parse::<Sort>().is_err());
    }
}
