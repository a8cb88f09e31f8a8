//! 基础设施层：日志和内存存储

pub mod logger;
pub mod store;
