//! Joystick subsystem for analog stick input handling
//!
//! Implements a single sample-then-decide pipeline:
//!
//! 1. [`reader`] - Pin configuration, sampling and the public API
//! 2. [`direction`] - Pure classification of a sample against thresholds
//! 3. [`thresholds`] - The four direction bounds
//! 4. [`error`] - Failure conditions of sampling and reporting
//!
//! # Architecture
//!
//! ```text
//! PinReader ──► Sample ──► classify(ThresholdSet) ──► Direction
//!  (X, Y, B)   (fresh)          (pure)                   │
//!                                             Telemetry ◄┴► Indicator
//! ```
//!
//! Every operation re-reads the hardware; nothing but the pin assignment and the
//! thresholds survives between calls.

pub mod direction;
pub mod error;
pub mod reader;
pub mod thresholds;

pub use direction::{classify, Direction, Sample};
pub use error::{JoystickError, PinRole};
pub use reader::{JoystickReader, PinConfig};
pub use thresholds::{ThresholdDirection, ThresholdSet, ANALOG_MAX};
