//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies beyond the value types the
//! executor needs. Only the error taxonomy, entity schemas, validation steps
//! and the repository contract.

pub mod errors;
pub mod repositories;
pub mod schema;
pub mod validation;

pub use errors::{DomainError, ErrorCode, ErrorName, ErrorSignal};
pub use repositories::*;
pub use schema::{Entity, EntitySchema, Field, FieldValue, Fields, id_field};
