//! Shared record types for the course catalog admin.
//!
//! - `domain`: the catalog records exchanged with the REST resources
//! - `shared`: field metadata used to drive editor forms

pub mod domain;
pub mod shared;
