pub mod config;
pub mod fake;
pub mod joystick;
pub mod output;
pub mod platform;

pub use joystick::{
    Direction, JoystickError, JoystickReader, PinConfig, PinRole, Sample, ThresholdDirection,
    ThresholdSet,
};
pub use output::{Compass, Indicator, Telemetry};
pub use platform::{DefaultPins, PinReader};
