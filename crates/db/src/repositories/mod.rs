//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ad_repo;
pub mod category_repo;
pub mod location_repo;
pub mod user_repo;

pub use ad_repo::AdRepo;
pub use category_repo::CategoryRepo;
pub use location_repo::LocationRepo;
pub use user_repo::UserRepo;
