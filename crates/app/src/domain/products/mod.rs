//! Products

pub mod barcode;
pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod store;
pub mod validation;

pub use errors::ProductsServiceError;
pub use service::*;
pub use store::*;
