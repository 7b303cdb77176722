//! Pagination helpers for API requests
//!
//! GitHub list endpoints are 1-indexed and cap `per_page` at 100. Collections
//! are walked until a page comes back shorter than the requested size.

/// Maximum page size supported by the GitHub API.
pub const MAX_PAGE_SIZE: usize = 100;

/// Pagination parameters for API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// Number of items per page (max 100)
    pub per_page: usize,
    /// Page number, starting at 1
    pub page: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            per_page: MAX_PAGE_SIZE,
            page: 1,
        }
    }
}

impl PaginationParams {
    /// Create new pagination params starting at the first full-size page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Params for the page after this one.
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    /// Whether a page holding `received` items was the last one.
    pub fn is_last(&self, received: usize) -> bool {
        received < self.per_page
    }

    /// Convert to query string parameters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("per_page".to_string(), self.per_page.to_string()),
            ("page".to_string(), self.page.to_string()),
        ]
    }
}

#[cfg(test)]
impl PaginationParams {
    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn per_page(mut self, size: usize) -> Self {
        self.per_page = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set the page number (1-indexed; 0 is treated as 1).
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::new();
        assert_eq!(params.per_page, 100);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_builder_clamps() {
        let params = PaginationParams::new().per_page(500).page(0);
        assert_eq!(params.per_page, MAX_PAGE_SIZE);
        assert_eq!(params.page, 1);

        let params = PaginationParams::new().per_page(0);
        assert_eq!(params.per_page, 1);
    }

    #[test]
    fn test_next_and_is_last() {
        let params = PaginationParams::new().per_page(2);
        assert!(!params.is_last(2));
        assert!(params.is_last(1));
        assert!(params.is_last(0));

        let next = params.next();
        assert_eq!(next.page, 2);
        assert_eq!(next.per_page, 2);
    }

    #[test]
    fn test_to_query() {
        let query = PaginationParams::new().per_page(30).page(3).to_query();
        assert_eq!(
            query,
            vec![
                ("per_page".to_string(), "30".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }
}
