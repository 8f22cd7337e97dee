pub mod chart;
pub mod comparison;
mod deck;
mod ids;
mod slide;

pub use chart::{Bar, BarChart, ChartError, ScaledBar};
pub use comparison::{ComparisonRow, ComparisonTable};
pub use ids::SlideIndex;

pub use deck::{Deck, DeckError};
pub use slide::SlideKind;
