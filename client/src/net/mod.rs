//! Data contract and data source modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the record shapes a booking API would serve, `seed`
//! supplies the in-memory records used until that API exists, and `stories`
//! holds the static article catalogue.

pub mod seed;
pub mod stories;
pub mod types;
