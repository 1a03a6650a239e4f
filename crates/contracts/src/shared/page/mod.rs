use serde::{Deserialize, Serialize};

/// Paged envelope returned by list endpoints (`GET /screens`, `GET /companies`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_pages: usize,
    pub total_elements: usize,
    #[serde(default)]
    pub page_number: usize,
    #[serde(default)]
    pub page_size: usize,
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            page_number: 0,
            page_size: 0,
        }
    }
}

/// Query string of list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_spring_style_envelope() {
        let raw = r#"{"content":[1,2,3],"totalPages":4,"totalElements":11,"pageNumber":0,"pageSize":3}"#;
        let page: PageResponse<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_elements, 11);
    }
}
