use serde::{Deserialize, Serialize};

/// Users shown per listing page.
pub const PER_PAGE: i64 = 5;

/// Query string for the list routes (`/?page=N`). Pages are 1-indexed.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
}
fn default_page() -> i64 {
    1
}

/// Form body for the upsert routes.
#[derive(Debug, Deserialize)]
pub struct UpsertForm {
    pub name: String,
    pub email: String,
}

/// Pagination metadata derived from the total row count.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = if total > 0 {
            (total + per_page - 1) / per_page
        } else {
            1
        };
        Self {
            total,
            page: page.max(1),
            per_page,
            total_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_page(&self) -> i64 {
        self.page - 1
    }

    pub fn next_page(&self) -> i64 {
        self.page + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_users_make_three_pages_of_five() {
        let meta = PageMeta::new(12, 1, PER_PAGE);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_prev());
        assert!(meta.has_next());
        assert_eq!(meta.next_page(), 2);
    }

    #[test]
    fn last_page_has_no_next() {
        let meta = PageMeta::new(12, 3, PER_PAGE);
        assert!(meta.has_prev());
        assert!(!meta.has_next());
        assert_eq!(meta.prev_page(), 2);
    }

    #[test]
    fn exact_multiple_does_not_add_an_empty_page() {
        let meta = PageMeta::new(10, 1, PER_PAGE);
        assert_eq!(meta.total_pages, 2);
    }

    #[test]
    fn empty_table_still_has_one_page() {
        let meta = PageMeta::new(0, 1, PER_PAGE);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_prev());
        assert!(!meta.has_next());
    }

    #[test]
    fn page_is_clamped_to_one() {
        let meta = PageMeta::new(12, 0, PER_PAGE);
        assert_eq!(meta.page, 1);
        let meta = PageMeta::new(12, -3, PER_PAGE);
        assert_eq!(meta.page, 1);
    }

    #[test]
    fn meta_serializes_all_fields() {
        let meta = PageMeta::new(12, 2, PER_PAGE);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"total\":12"));
        assert!(json.contains("\"page\":2"));
        assert!(json.contains("\"per_page\":5"));
        assert!(json.contains("\"total_pages\":3"));
    }
}
