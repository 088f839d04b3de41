//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs whose fields are optional so that missing
//!   values surface as validation errors rather than extractor rejections

pub mod feedback;
