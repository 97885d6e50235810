use serde::{Deserialize, Serialize};

// Response genérica
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Página de resultados
#[derive(Debug, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>, page_number: i64, page_size: i64, total_items: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_items + page_size - 1) / page_size
        } else {
            0
        };

        Self {
            items,
            page_number,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PagedResponse::<i32>::new(vec![], 1, 25, 0).total_pages, 0);
        assert_eq!(PagedResponse::<i32>::new(vec![], 1, 25, 25).total_pages, 1);
        assert_eq!(PagedResponse::<i32>::new(vec![], 1, 25, 26).total_pages, 2);
        assert_eq!(PagedResponse::<i32>::new(vec![], 3, 10, 95).total_pages, 10);
    }
}
