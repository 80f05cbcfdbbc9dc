//! Data models for the favorites service.
//!
//! These models match the frontend contract exactly for seamless interoperability.

mod favorite;

pub use favorite::*;
