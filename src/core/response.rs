//! 核心响应处理模块

use serde::Serialize;

/// 分页响应结构
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub products: Vec<T>,
}

/// 分页参数，`page` 从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 5 }
    }
}

impl Pagination {
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        if self.limit == 0 {
            return 0;
        }
        total_items.div_ceil(self.limit)
    }

    /// 截取当前页，页码越界时返回空
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Page<T> {
        let products = items
            .iter()
            .skip(self.offset())
            .take(self.limit)
            .cloned()
            .collect();

        Page {
            current_page: self.page,
            total_pages: self.total_pages(items.len()),
            total_items: items.len(),
            items_per_page: self.limit,
            products,
        }
    }
}

/// 只带一条提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_first_and_last_page() {
        let items: Vec<u32> = (1..=7).collect();

        let first = Pagination { page: 1, limit: 5 }.paginate(&items);
        assert_eq!(first.products, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_items, 7);

        let last = Pagination { page: 2, limit: 5 }.paginate(&items);
        assert_eq!(last.products, vec![6, 7]);
        assert_eq!(last.current_page, 2);
    }

    #[test]
    fn test_paginate_past_the_end() {
        let items: Vec<u32> = (1..=7).collect();
        let page = Pagination { page: 3, limit: 5 }.paginate(&items);
        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_zero_page_behaves_like_first_page() {
        let items: Vec<u32> = (1..=7).collect();
        let pagination = Pagination { page: 0, limit: 5 };
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.paginate(&items).products, vec![1, 2, 3, 4, 5]);

        let empty = Pagination { page: 1, limit: 0 }.paginate(&items);
        assert!(empty.products.is_empty());
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items: Vec<u32> = (1..=3).collect();
        let page = Pagination {
            page: usize::MAX,
            limit: usize::MAX,
        }
        .paginate(&items);
        assert!(page.products.is_empty());
    }
}
