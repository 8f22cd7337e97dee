pub mod error;
pub mod indicator;
pub mod model;
pub mod navigator;
pub mod tracker;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use error::Error;
pub use indicator::{Dot, NavIndicator};
pub use navigator::{ScrollBehavior, ScrollCommand, navigate, target_offset};
pub use tracker::{ScrollTracker, derive_index};
pub use viewport::ViewportState;
