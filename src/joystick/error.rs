use std::fmt;

/// Boxed error coming from a platform collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which of the three joystick inputs a read was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    X,
    Y,
    Button,
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRole::X => f.write_str("X"),
            PinRole::Y => f.write_str("Y"),
            PinRole::Button => f.write_str("button"),
        }
    }
}

/// Errors that can occur while sampling or reporting joystick state
#[derive(Debug, thiserror::Error)]
pub enum JoystickError {
    /// A read was attempted before `configure` assigned the pins
    #[error("Joystick pins are not configured")]
    NotConfigured,

    /// The platform failed to read one of the inputs
    #[error("Failed to read {role} pin {pin}: {source}")]
    PinRead {
        role: PinRole,
        pin: String,
        #[source]
        source: BoxError,
    },

    #[error("Telemetry error: {0}")]
    Telemetry(#[source] BoxError),

    #[error("Indicator error: {0}")]
    Indicator(#[source] BoxError),
}
