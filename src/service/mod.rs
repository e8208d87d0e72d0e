//! Transport-agnostic game service.
//!
//! [`Arena`] is what an HTTP layer would wrap: one method per route, each
//! looking a game up by id and running the engine under that game's lock.

mod arena;

pub use arena::{ActionResponse, Arena};
