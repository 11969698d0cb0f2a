//! Raspberry Pi platform
//!
//! The Pi has no analog inputs of its own, so both joystick axes go through an
//! MCP3008 10-bit ADC on the SPI bus. The button is a plain GPIO input.
//!
//! ```text
//! Joystick VRx ──► MCP3008 CH1 ─┐
//! Joystick VRy ──► MCP3008 CH0 ─┼─ SPI ──► Pi
//! Joystick SW  ──────────────────── GPIO17
//! ```

use rppal::gpio::{Gpio, InputPin, Level};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, info};

use super::{DefaultPins, PinReader};
use crate::joystick::PinConfig;

const MCP3008_CHANNELS: u8 = 8;
const MCP3008_START: u8 = 0x01;
const MCP3008_SINGLE_ENDED: u8 = 0x08;

/// SPI wiring of the ADC
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AdcSettings {
    /// SPI bus number (0-6)
    pub bus: u8,
    /// Chip select line on that bus
    pub slave_select: u8,
    pub clock_hz: u32,
}

impl Default for AdcSettings {
    fn default() -> Self {
        Self {
            bus: 0,
            slave_select: 0,
            clock_hz: 1_000_000,
        }
    }
}

/// Internal resistor applied to button inputs
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ButtonBias {
    #[default]
    Off,
    PullUp,
    PullDown,
}

#[derive(Debug, thiserror::Error)]
pub enum RpiError {
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("SPI error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[error("Unsupported SPI bus: {0}")]
    InvalidBus(u8),

    #[error("Unsupported SPI slave select: {0}")]
    InvalidSlaveSelect(u8),

    #[error("ADC channel {0} out of range (0-7)")]
    InvalidChannel(u8),

    #[error("Short SPI transfer: {0} of 3 bytes")]
    ShortTransfer(usize),
}

pub struct RpiPlatform {
    gpio: Gpio,
    spi: Spi,
    bias: ButtonBias,
    // Input pins are claimed on first read and kept
    inputs: HashMap<u8, InputPin>,
}

impl RpiPlatform {
    pub fn new(adc: &AdcSettings, bias: ButtonBias) -> Result<Self, RpiError> {
        info!(
            "Opening MCP3008 on SPI bus {} / CS {} at {} Hz",
            adc.bus, adc.slave_select, adc.clock_hz
        );
        let spi = Spi::new(
            spi_bus(adc.bus)?,
            slave_select(adc.slave_select)?,
            adc.clock_hz,
            Mode::Mode0,
        )?;
        let gpio = Gpio::new()?;
        debug!("GPIO initialised, button bias: {:?}", bias);

        Ok(Self {
            gpio,
            spi,
            bias,
            inputs: HashMap::new(),
        })
    }

    fn input(&mut self, pin: u8) -> Result<&InputPin, RpiError> {
        let input = match self.inputs.entry(pin) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let raw = self.gpio.get(pin)?;
                let input = match self.bias {
                    ButtonBias::Off => raw.into_input(),
                    ButtonBias::PullUp => raw.into_input_pullup(),
                    ButtonBias::PullDown => raw.into_input_pulldown(),
                };
                debug!("Claimed GPIO {} as input", pin);
                entry.insert(input)
            }
        };
        Ok(&*input)
    }
}

impl PinReader for RpiPlatform {
    /// MCP3008 channel
    type AnalogPin = u8;
    /// BCM GPIO number
    type DigitalPin = u8;
    type Error = RpiError;

    fn read_analog(&mut self, channel: u8) -> Result<u16, RpiError> {
        let request = mcp3008_request(channel)?;
        let mut response = [0u8; 3];
        let read = self.spi.transfer(&mut response, &request)?;
        if read < response.len() {
            return Err(RpiError::ShortTransfer(read));
        }
        Ok(mcp3008_value(&response))
    }

    fn read_digital(&mut self, pin: u8) -> Result<u8, RpiError> {
        let level = self.input(pin)?.read();
        Ok(match level {
            Level::High => 1,
            Level::Low => 0,
        })
    }
}

impl DefaultPins for RpiPlatform {
    fn default_pins() -> PinConfig<u8, u8> {
        PinConfig::new(1, 0, 17)
    }
}

fn spi_bus(bus: u8) -> Result<Bus, RpiError> {
    Ok(match bus {
        0 => Bus::Spi0,
        1 => Bus::Spi1,
        2 => Bus::Spi2,
        3 => Bus::Spi3,
        4 => Bus::Spi4,
        5 => Bus::Spi5,
        6 => Bus::Spi6,
        other => return Err(RpiError::InvalidBus(other)),
    })
}

fn slave_select(line: u8) -> Result<SlaveSelect, RpiError> {
    Ok(match line {
        0 => SlaveSelect::Ss0,
        1 => SlaveSelect::Ss1,
        2 => SlaveSelect::Ss2,
        other => return Err(RpiError::InvalidSlaveSelect(other)),
    })
}

// Start bit, single-ended mode + channel in the high nibble, one padding byte
fn mcp3008_request(channel: u8) -> Result<[u8; 3], RpiError> {
    if channel >= MCP3008_CHANNELS {
        return Err(RpiError::InvalidChannel(channel));
    }
    Ok([MCP3008_START, (MCP3008_SINGLE_ENDED | channel) << 4, 0x00])
}

fn mcp3008_value(response: &[u8; 3]) -> u16 {
    (u16::from(response[1] & 0x03) << 8) | u16::from(response[2])
}
