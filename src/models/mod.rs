pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod product;
pub mod product_category;
