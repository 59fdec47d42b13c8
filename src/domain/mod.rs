pub mod account;
pub mod category;
pub mod financing;
pub mod product;
pub mod types;
