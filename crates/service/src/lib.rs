//! Data-access layer for the camp registry.
//! - One module of CRUD operations per entity.
//! - Reuses validation and entity definitions from the `models` crate.
//! - Camper and activity deletes cascade to their signups in one transaction.

pub mod errors;
pub mod input;
pub mod camper_service;
pub mod activity_service;
pub mod signup_service;
#[cfg(test)]
pub mod test_support;
