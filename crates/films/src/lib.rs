//! Films domain module (validated film records).
//!
//! This crate contains business rules for films, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod film;

pub use film::{Film, FilmError, FilmId};
