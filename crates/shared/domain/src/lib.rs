//! Domain layer - the user record and its defaults.
//!
//! This crate has no database or runtime dependencies; the ORM entity in
//! the service crate converts into these types.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{NewUser, User};
