//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the shape the API returns
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO whose fields overwrite the row as given

pub mod ad;
pub mod category;
pub mod location;
pub mod user;
