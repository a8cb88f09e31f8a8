//! 应用层

pub mod product;
pub mod router;

pub use product::handler::AppState;
pub use router::create_router;
