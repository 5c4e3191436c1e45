mod blade;
mod error;
mod flow;

pub use blade::{Blade, BladeStation};
pub use error::GeometryError;
pub use flow::FlowConditions;
