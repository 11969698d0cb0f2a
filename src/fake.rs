//! In-memory collaborators for exercising a [`JoystickReader`](crate::JoystickReader)
//! without hardware.

use std::collections::HashMap;
use std::io;

use crate::joystick::PinConfig;
use crate::output::{Compass, Indicator, Telemetry};
use crate::platform::{DefaultPins, PinReader};

#[derive(Debug, thiserror::Error)]
pub enum FakeError {
    #[error("No level set for analog pin {0}")]
    UnknownAnalogPin(u8),

    #[error("No level set for digital pin {0}")]
    UnknownDigitalPin(u8),
}

/// Platform whose pin levels are set by the test
///
/// Pins are plain `u8` numbers. Reading a pin that was never given a level is
/// an error. Default wiring is X on analog 1, Y on analog 0, button on digital 2.
#[derive(Debug, Default, Clone)]
pub struct FakePlatform {
    analog: HashMap<u8, u16>,
    digital: HashMap<u8, u8>,
    reads: usize,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform with the default pins already holding the given levels
    pub fn with_levels(x: u16, y: u16, button: u8) -> Self {
        let pins = Self::default_pins();
        let mut platform = Self::new();
        platform.set_analog(pins.x, x);
        platform.set_analog(pins.y, y);
        platform.set_digital(pins.button, button);
        platform
    }

    pub fn set_analog(&mut self, pin: u8, level: u16) {
        self.analog.insert(pin, level);
    }

    pub fn set_digital(&mut self, pin: u8, level: u8) {
        self.digital.insert(pin, level);
    }

    /// Number of pin reads served so far
    pub fn read_count(&self) -> usize {
        self.reads
    }
}

impl PinReader for FakePlatform {
    type AnalogPin = u8;
    type DigitalPin = u8;
    type Error = FakeError;

    fn read_analog(&mut self, pin: u8) -> Result<u16, FakeError> {
        self.reads += 1;
        self.analog
            .get(&pin)
            .copied()
            .ok_or(FakeError::UnknownAnalogPin(pin))
    }

    fn read_digital(&mut self, pin: u8) -> Result<u8, FakeError> {
        self.reads += 1;
        self.digital
            .get(&pin)
            .copied()
            .ok_or(FakeError::UnknownDigitalPin(pin))
    }
}

impl DefaultPins for FakePlatform {
    fn default_pins() -> PinConfig<u8, u8> {
        PinConfig::new(1, 0, 2)
    }
}

/// Telemetry that keeps everything written to it
#[derive(Debug, Default, Clone)]
pub struct RecordingTelemetry {
    pub values: Vec<(String, i32)>,
    pub lines: Vec<String>,
    fail: bool,
}

impl RecordingTelemetry {
    /// Telemetry whose every write fails with a broken pipe
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> io::Result<()> {
        if self.fail {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "telemetry closed"))
        } else {
            Ok(())
        }
    }
}

impl Telemetry for RecordingTelemetry {
    type Error = io::Error;

    fn write_value(&mut self, label: &str, value: i32) -> io::Result<()> {
        self.check()?;
        self.values.push((label.to_string(), value));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.check()?;
        self.lines.push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Arrow(Compass),
    Blocked,
}

/// Indicator that keeps a log of render calls
#[derive(Debug, Default, Clone)]
pub struct RecordingIndicator {
    pub rendered: Vec<Rendered>,
}

impl Indicator for RecordingIndicator {
    type Error = std::convert::Infallible;

    fn show_arrow(&mut self, heading: Compass) -> Result<(), Self::Error> {
        self.rendered.push(Rendered::Arrow(heading));
        Ok(())
    }

    fn show_blocked(&mut self) -> Result<(), Self::Error> {
        self.rendered.push(Rendered::Blocked);
        Ok(())
    }
}
