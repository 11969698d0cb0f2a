//! Feedback collaborators for joystick state
//!
//! - [`telemetry`] - labeled values and text lines (serial console, tracing)
//! - [`indicator`] - directional glyphs on a 5x5 LED matrix
//! - [`glyph`] - the bitmaps the indicator renders

pub mod glyph;
pub mod indicator;
pub mod telemetry;

pub use indicator::{Compass, Indicator, MatrixIndicator};
pub use telemetry::{SerialTelemetry, Telemetry, TracingTelemetry};
