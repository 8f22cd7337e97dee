mod chart_vm;
mod nav_vm;

pub use chart_vm::{ChartRowVm, map_chart_rows};
pub use nav_vm::{DeckIntent, NavDotVm, NavRailVm, build_nav_rail, resolve_intent, start_intent};
