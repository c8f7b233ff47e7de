//! Public types for the tempconv API.

mod conversion;
mod unit;

pub use conversion::{Conversion, ConvertRequest, Formula};
pub use unit::{TemperatureUnit, UnitRole};
