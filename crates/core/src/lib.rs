//! Shared building blocks for the classifieds backend: primary key type,
//! domain errors, and page-number pagination.

pub mod error;
pub mod pagination;
pub mod types;
