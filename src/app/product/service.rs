//! 产品业务服务

use std::collections::BTreeMap;

use tracing::info;
use uuid::Uuid;

use super::model::{ListQuery, Product, ProductInput, ProductStats, SearchResults};
use crate::core::error::{CoreError, CoreResult};
use crate::core::response::{Page, Pagination};
use crate::infrastructure::store::ProductStore;

const INVALID_PAGINATION: &str =
    "Invalid pagination parameters. 'page' and 'limit' must be positive numbers.";

#[derive(Clone)]
pub struct ProductService {
    store: ProductStore,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    /// 分类过滤后分页
    pub fn list_products(&self, query: &ListQuery) -> CoreResult<Page<Product>> {
        let pagination = parse_pagination(query.page.as_deref(), query.limit.as_deref())?;

        let mut results = self.store.all();

        if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
            let wanted = category.to_lowercase();
            results.retain(|p| p.category.to_lowercase() == wanted);

            if results.is_empty() {
                return Err(CoreError::not_found(format!(
                    "No products found in category '{}'",
                    category
                )));
            }
        }

        let page = pagination.paginate(&results);
        if page.products.is_empty() {
            return Err(CoreError::not_found(
                "No products found for the requested page.",
            ));
        }

        Ok(page)
    }

    /// 按名称做不区分大小写的子串搜索
    pub fn search_products(&self, name: Option<&str>) -> CoreResult<SearchResults> {
        let query = match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(CoreError::validation(
                    "Search query parameter 'name' is required.",
                ))
            }
        };

        let needle = query.to_lowercase();
        let products: Vec<Product> = self
            .store
            .all()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();

        if products.is_empty() {
            return Err(CoreError::not_found(format!(
                "No products found matching '{}'.",
                query
            )));
        }

        Ok(SearchResults {
            total_results: products.len(),
            query: query.to_string(),
            products,
        })
    }

    pub fn stats(&self) -> CoreResult<ProductStats> {
        let products = self.store.all();
        if products.is_empty() {
            return Err(CoreError::not_found(
                "No products available for statistics.",
            ));
        }

        let mut categories = BTreeMap::new();
        for product in &products {
            *categories.entry(product.category.clone()).or_insert(0) += 1;
        }

        let in_stock_count = products.iter().filter(|p| p.in_stock).count();

        Ok(ProductStats {
            total_products: products.len(),
            in_stock_count,
            out_of_stock_count: products.len() - in_stock_count,
            categories,
        })
    }

    pub fn get_product(&self, id: &str) -> CoreResult<Product> {
        self.store.find(id).ok_or_else(product_not_found)
    }

    pub fn create_product(&self, input: ProductInput) -> Product {
        let product = Product::new(self.next_id(), input);
        self.store.insert(product.clone());
        info!("Created product {} ({})", product.id, product.name);
        product
    }

    /// 合并五个业务字段，`id` 保持不变
    pub fn update_product(&self, id: &str, input: ProductInput) -> CoreResult<Product> {
        let product = self
            .store
            .update(id, input.into())
            .ok_or_else(product_not_found)?;
        info!("Updated product {}", product.id);
        Ok(product)
    }

    pub fn delete_product(&self, id: &str) -> CoreResult<Product> {
        let product = self.store.remove(id).ok_or_else(product_not_found)?;
        info!("Deleted product {}", product.id);
        Ok(product)
    }

    // v4 冲突几乎不可能，但仍然保证不与现有 id 重复
    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }
}

fn product_not_found() -> CoreError {
    CoreError::not_found("Product not found")
}

/// 解析分页参数，缺省为 page=1、limit=5
pub fn parse_pagination(page: Option<&str>, limit: Option<&str>) -> CoreResult<Pagination> {
    let defaults = Pagination::default();

    let page = match page {
        Some(raw) => parse_positive(raw)?,
        None => defaults.page,
    };
    let limit = match limit {
        Some(raw) => parse_positive(raw)?,
        None => defaults.limit,
    };

    Ok(Pagination { page, limit })
}

/// 按 `parseInt` 的规则取开头的数字：`"2abc"` 为 2，`"0x10"` 按十六进制为 16，
/// 超出 `usize` 的值饱和到 `usize::MAX`（之后得到空页）
fn parse_positive(raw: &str) -> CoreResult<usize> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (digits, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() {
        return Err(CoreError::validation(INVALID_PAGINATION));
    }

    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0usize, |acc, d| {
            acc.saturating_mul(radix as usize).saturating_add(d as usize)
        });

    if value == 0 {
        return Err(CoreError::validation(INVALID_PAGINATION));
    }

    Ok(value)
}
