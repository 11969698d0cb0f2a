use std::io::{self, Write};
use tracing::info;

/// Sink for labeled numeric values and free text lines
pub trait Telemetry {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write_value(&mut self, label: &str, value: i32) -> Result<(), Self::Error>;

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Serial-console telemetry.
///
/// Values go out as `label:value` and lines as plain text, both terminated with
/// `\r\n` so serial plotters and terminal monitors pick them up unchanged.
pub struct SerialTelemetry<W: Write> {
    writer: W,
}

impl<W: Write> SerialTelemetry<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Telemetry for SerialTelemetry<W> {
    type Error = io::Error;

    fn write_value(&mut self, label: &str, value: i32) -> Result<(), io::Error> {
        write!(self.writer, "{}:{}\r\n", label, value)?;
        self.writer.flush()
    }

    fn write_line(&mut self, text: &str) -> Result<(), io::Error> {
        write!(self.writer, "{}\r\n", text)?;
        self.writer.flush()
    }
}

/// Telemetry that ends up in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    type Error = std::convert::Infallible;

    fn write_value(&mut self, label: &str, value: i32) -> Result<(), Self::Error> {
        info!(target: "keystick::telemetry", label, value, "Joystick value");
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        info!(target: "keystick::telemetry", "{}", text);
        Ok(())
    }
}
