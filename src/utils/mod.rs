//! Utility modules shared across commands.

mod plural;
pub mod path;
pub mod route;

pub use plural::{plural_count, plural_s};
