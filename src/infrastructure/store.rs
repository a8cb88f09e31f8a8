//! 内存产品存储
//!
//! 有序的产品列表，进程启动时写入固定的种子数据，不做持久化。

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::app::product::model::{Product, ProductPatch};

#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// 使用种子数据初始化
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    // 每次修改都是单步的 push/remove/赋值，锁中毒后数据仍然一致，直接取回
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(|e| e.into_inner())
    }

    /// 按插入顺序返回全部产品
    pub fn all(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn find(&self, id: &str) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().iter().any(|p| p.id == id)
    }

    pub fn insert(&self, product: Product) {
        self.write().push(product);
    }

    /// 合并字段并返回更新后的产品，不存在时返回 `None`
    pub fn update(&self, id: &str, patch: ProductPatch) -> Option<Product> {
        let mut products = self.write();
        let product = products.iter_mut().find(|p| p.id == id)?;
        product.apply(patch);
        Some(product.clone())
    }

    pub fn remove(&self, id: &str) -> Option<Product> {
        let mut products = self.write();
        let index = products.iter().position(|p| p.id == id)?;
        Some(products.remove(index))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

fn seed(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    }
}

/// 启动时的七条种子数据
pub fn seed_products() -> Vec<Product> {
    vec![
        seed("1", "Laptop", "High-performance laptop with 16GB RAM", 1200.0, "electronics", true),
        seed("2", "Smartphone", "Latest model with 128GB storage", 800.0, "electronics", true),
        seed("3", "Coffee Maker", "Programmable coffee maker with timer", 50.0, "kitchen", false),
        seed("4", "Lego City Set", "Creative building toy set for kids aged 6+.", 4200.0, "toys", true),
        seed("5", "Teddy Bear Plush", "Soft and cuddly teddy bear perfect for gifting.", 1500.0, "toys", true),
        seed("6", "Running Shoes", "Lightweight breathable shoes ideal for running and training.", 5600.0, "fashion", true),
        seed("7", "Cooking Oil 5L", "Pure sunflower oil ideal for all types of cooking.", 1300.0, "groceries", false),
    ]
}
