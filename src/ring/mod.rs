//! Ring data model: colors, the color store, and the recoloring rule.

pub mod recolor;
pub mod store;

/// A node color.
pub type Color = u64;

pub use recolor::{bit_width, color_bound_after, recolor};
pub use store::{ColorStore, check_proper};
