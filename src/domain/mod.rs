//! Axis domains for continuous scales.

pub mod bar;
mod chart;
mod continuous;
pub mod line;

pub use bar::{is_diverging, value_domain};
pub use chart::ChartKind;
pub use continuous::{Domain, resolve_domain};
pub use line::{x_domain, y_domain};
