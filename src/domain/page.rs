use serde::{Deserialize, Serialize};

/// One page of a backend listing (`/blog/paginated`, `/case-studies/filtered`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: usize,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total_pages: usize,
}

fn first_page() -> usize {
    1
}

impl<T> PageResult<T> {
    pub fn empty(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 1,
            limit,
            total_pages: 0,
        }
    }

    /// Page count derived from `total` and the requested page size.
    pub fn page_count(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.total.div_ceil(per_page)
    }
}
