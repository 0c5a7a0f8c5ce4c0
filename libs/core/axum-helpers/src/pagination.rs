//! Paged response envelope for list endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Response envelope combining a page of results with pagination metadata.
///
/// Derived fields:
/// - `total_pages`: `ceil(total_elements / page_size)`, 0 when `page_size` is 0
/// - `first`: whether this is the first page
/// - `last`: whether this is the last page
///
/// # JSON Example
///
/// ```json
/// {
///   "content": [],
///   "totalElements": 23,
///   "pageNumber": 2,
///   "pageSize": 10,
///   "totalPages": 3,
///   "last": true,
///   "first": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub last: bool,
    pub first: bool,
}

impl<T> PagedResponse<T> {
    /// Build an envelope from a page of content and its metadata.
    ///
    /// Pure function of its inputs; an empty result set yields
    /// `first == last == true`.
    pub fn of(content: Vec<T>, total_elements: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if page_size > 0 {
            total_elements.div_ceil(page_size as u64) as u32
        } else {
            0
        };

        Self {
            content,
            total_elements,
            page_number,
            page_size,
            total_pages,
            last: page_number as i64 >= total_pages as i64 - 1,
            first: page_number == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page = PagedResponse::<i32>::of(vec![], 0, 0, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn test_last_partial_page() {
        let page = PagedResponse::of(vec![1, 2, 3, 4, 5], 23, 2, 10);
        assert_eq!(page.total_pages, 3);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn test_first_of_many() {
        let page = PagedResponse::of(vec![1, 2, 3], 30, 0, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn test_middle_page() {
        let page = PagedResponse::of(vec![1], 30, 1, 10);
        assert!(!page.first);
        assert!(!page.last);
    }

    #[test]
    fn test_zero_page_size_does_not_divide() {
        let page = PagedResponse::of(vec![1, 2], 2, 0, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn test_exact_page_boundary() {
        let page = PagedResponse::of(vec![1; 10], 20, 1, 10);
        assert_eq!(page.total_pages, 2);
        assert!(page.last);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let page = PagedResponse::of(vec![1], 1, 0, 10);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("totalElements").is_some());
        assert!(json.get("pageNumber").is_some());
        assert!(json.get("pageSize").is_some());
        assert!(json.get("totalPages").is_some());
    }
}
