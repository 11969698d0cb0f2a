//! Pin access capabilities consumed by the joystick reader
//!
//! The reader never touches hardware directly. A platform hands out analog and
//! digital reads for opaque pin identifiers; what a pin identifier means (ADC
//! channel, GPIO number, board pad) is up to the implementation.
//!
//! - [`rpi`] - Raspberry Pi backend (MCP3008 over SPI plus GPIO)
//! - [`crate::fake`] - In-memory platform for tests

pub mod rpi;

use std::fmt;

use crate::joystick::PinConfig;

/// Reads raw analog and digital levels from platform pins
pub trait PinReader {
    /// Identifier of an analog-capable pin
    type AnalogPin: Copy + fmt::Debug;

    /// Identifier of a digital-capable pin
    type DigitalPin: Copy + fmt::Debug;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the analog level in the platform's native range (0-1023)
    fn read_analog(&mut self, pin: Self::AnalogPin) -> Result<u16, Self::Error>;

    /// Returns the digital level in the platform's native 0/1 encoding
    fn read_digital(&mut self, pin: Self::DigitalPin) -> Result<u8, Self::Error>;
}

/// Platforms that declare a default wiring for the joystick
pub trait DefaultPins: PinReader {
    fn default_pins() -> PinConfig<Self::AnalogPin, Self::DigitalPin>;
}
