//! Joystick Reader - sampling, classification and reporting for one joystick
//!
//! Owns the pin assignment and the threshold set of a single two-axis joystick
//! with a push button. Every query samples the hardware again through the
//! platform's [`PinReader`]; no reading outlives the call that produced it.

use tracing::{debug, trace};

use super::direction::{classify, Direction, Sample};
use super::error::{JoystickError, PinRole};
use super::thresholds::{ThresholdDirection, ThresholdSet};
use crate::output::{Indicator, Telemetry};
use crate::platform::{DefaultPins, PinReader};

/// Pins the joystick is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig<A, D> {
    /// Analog pin for left and right movement
    pub x: A,
    /// Analog pin for up and down movement
    pub y: A,
    /// Digital pin for the push button
    pub button: D,
}

impl<A, D> PinConfig<A, D> {
    pub fn new(x: A, y: A, button: D) -> Self {
        Self { x, y, button }
    }
}

/// Reader for a single analog joystick
///
/// Holds the only two pieces of long-lived state: the pin assignment (unset
/// until [`configure`](Self::configure) is called) and the [`ThresholdSet`].
/// Several readers can coexist, each with its own platform handle.
///
/// # Examples
///
/// ```rust
/// use keystick::fake::FakePlatform;
/// use keystick::{Direction, JoystickReader};
///
/// let mut platform = FakePlatform::new();
/// platform.set_analog(1, 500);
/// platform.set_analog(0, 900);
/// platform.set_digital(2, 0);
///
/// let mut reader = JoystickReader::new(platform);
/// reader.configure(1, 0, 2);
/// assert_eq!(reader.classify_direction().unwrap(), Direction::Up);
/// ```
pub struct JoystickReader<P: PinReader> {
    platform: P,
    pins: Option<PinConfig<P::AnalogPin, P::DigitalPin>>,
    thresholds: ThresholdSet,
}

impl<P: PinReader> JoystickReader<P> {
    /// Creates an unconfigured reader with default thresholds
    pub fn new(platform: P) -> Self {
        Self::with_thresholds(platform, ThresholdSet::default())
    }

    pub fn with_thresholds(platform: P, thresholds: ThresholdSet) -> Self {
        debug!("Creating joystick reader with thresholds: {:?}", thresholds);
        Self {
            platform,
            pins: None,
            thresholds,
        }
    }

    /// Assigns the X, Y and button pins, replacing any earlier assignment.
    ///
    /// No validation is done; the platform decides what a pin identifier means
    /// when it is read.
    pub fn configure(&mut self, x: P::AnalogPin, y: P::AnalogPin, button: P::DigitalPin) {
        let pins = PinConfig::new(x, y, button);
        debug!("Configuring joystick pins: {:?}", pins);
        self.pins = Some(pins);
    }

    pub fn is_configured(&self) -> bool {
        self.pins.is_some()
    }

    pub fn pins(&self) -> Option<&PinConfig<P::AnalogPin, P::DigitalPin>> {
        self.pins.as_ref()
    }

    /// Current direction of the stick, sampled fresh
    ///
    /// # Errors
    ///
    /// * [`JoystickError::NotConfigured`] - no pins assigned yet
    /// * [`JoystickError::PinRead`] - the platform failed to read an input
    pub fn classify_direction(&mut self) -> Result<Direction, JoystickError> {
        let sample = self.sample()?;
        let direction = classify(&sample, &self.thresholds);
        trace!("Classified {:?} as {}", sample, direction);
        Ok(direction)
    }

    /// Whether the button reads exactly `1` right now
    pub fn is_pressed(&mut self) -> Result<bool, JoystickError> {
        Ok(self.sample()?.is_pressed())
    }

    /// Replaces one threshold; takes effect on the next classification
    pub fn override_threshold(&mut self, direction: ThresholdDirection, amount: u16) {
        debug!(
            "Overriding {} threshold: {} -> {}",
            direction,
            self.thresholds.get(direction),
            amount
        );
        self.thresholds.set(direction, amount);
    }

    pub fn threshold(&self, direction: ThresholdDirection) -> u16 {
        self.thresholds.get(direction)
    }

    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    /// Samples once and writes the raw `X`, `Y` and `B` values
    pub fn report_to_telemetry<T: Telemetry>(
        &mut self,
        telemetry: &mut T,
    ) -> Result<(), JoystickError> {
        let sample = self.sample()?;
        let values = [
            ("X", i32::from(sample.x)),
            ("Y", i32::from(sample.y)),
            ("B", i32::from(sample.button)),
        ];
        for (label, value) in values {
            telemetry
                .write_value(label, value)
                .map_err(|e| JoystickError::Telemetry(Box::new(e)))?;
        }
        Ok(())
    }

    /// Classifies and writes the direction name as one line
    pub fn report_direction_to_telemetry<T: Telemetry>(
        &mut self,
        telemetry: &mut T,
    ) -> Result<(), JoystickError> {
        let direction = self.classify_direction()?;
        telemetry
            .write_line(direction.name())
            .map_err(|e| JoystickError::Telemetry(Box::new(e)))
    }

    /// Classifies and shows the matching arrow, or the blocked icon when centred
    pub fn report_direction_to_indicator<I: Indicator>(
        &mut self,
        indicator: &mut I,
    ) -> Result<(), JoystickError> {
        let direction = self.classify_direction()?;
        let result = match direction.compass() {
            Some(heading) => indicator.show_arrow(heading),
            None => indicator.show_blocked(),
        };
        result.map_err(|e| JoystickError::Indicator(Box::new(e)))
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    // Exactly three hardware reads: X, Y, then the button
    fn sample(&mut self) -> Result<Sample, JoystickError> {
        let pins = self.pins.ok_or(JoystickError::NotConfigured)?;

        let x = self
            .platform
            .read_analog(pins.x)
            .map_err(|e| read_error(PinRole::X, pins.x, e))?;
        let y = self
            .platform
            .read_analog(pins.y)
            .map_err(|e| read_error(PinRole::Y, pins.y, e))?;
        let button = self
            .platform
            .read_digital(pins.button)
            .map_err(|e| read_error(PinRole::Button, pins.button, e))?;

        let sample = Sample { x, y, button };
        trace!("Sampled joystick: {:?}", sample);
        Ok(sample)
    }
}

impl<P: DefaultPins> JoystickReader<P> {
    /// Assigns the platform's default wiring
    pub fn configure_default(&mut self) {
        let pins = P::default_pins();
        self.configure(pins.x, pins.y, pins.button);
    }
}

fn read_error<E>(role: PinRole, pin: impl std::fmt::Debug, source: E) -> JoystickError
where
    E: std::error::Error + Send + Sync + 'static,
{
    JoystickError::PinRead {
        role,
        pin: format!("{:?}", pin),
        source: Box::new(source),
    }
}
