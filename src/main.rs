use color_eyre::{eyre::eyre, Result};
use keystick::config::{AppConfig, Report};
use keystick::output::{MatrixIndicator, SerialTelemetry};
use keystick::platform::rpi::RpiPlatform;
use keystick::{DefaultPins, Direction, JoystickError, JoystickReader, PinReader};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(AppConfig::default_path);
    info!("Using config file {}", config_path.display());
    let config = AppConfig::load_or_create(&config_path)
        .await
        .map_err(|e| eyre!("Failed to load config: {}", e))?;

    let platform = RpiPlatform::new(&config.adc, config.button_bias)
        .map_err(|e| eyre!("Failed to open joystick hardware: {}", e))?;

    let mut reader = JoystickReader::with_thresholds(platform, config.thresholds);
    let pins = config.pins.resolve(RpiPlatform::default_pins());
    reader.configure(pins.x, pins.y, pins.button);
    info!(
        "Joystick on X=CH{} Y=CH{} B=GPIO{}, polling every {} ms",
        pins.x, pins.y, pins.button, config.poll.interval_ms
    );

    let mut outputs = Outputs {
        telemetry: SerialTelemetry::new(io::stdout()),
        indicator: MatrixIndicator::new(io::stdout()),
        reports: config.poll.reports.clone(),
        pressed: false,
        direction: Direction::None,
    };

    let mut ticker = tokio::time::interval(Duration::from_millis(config.poll.interval_ms));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = outputs.poll(&mut reader) {
                    warn!("Joystick poll failed: {}", e);
                }
            }
            _ = &mut shutdown => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

struct Outputs {
    telemetry: SerialTelemetry<Stdout>,
    indicator: MatrixIndicator<Stdout>,
    reports: Vec<Report>,
    // Last logged state, only used to log transitions
    pressed: bool,
    direction: Direction,
}

impl Outputs {
    fn poll<P: PinReader>(&mut self, reader: &mut JoystickReader<P>) -> Result<(), JoystickError> {
        for report in &self.reports {
            match report {
                Report::Values => reader.report_to_telemetry(&mut self.telemetry)?,
                Report::Direction => reader.report_direction_to_telemetry(&mut self.telemetry)?,
                Report::Indicator => reader.report_direction_to_indicator(&mut self.indicator)?,
            }
        }

        let direction = reader.classify_direction()?;
        if direction != self.direction {
            debug!("Direction changed: {} -> {}", self.direction, direction);
            self.direction = direction;
        }

        let pressed = reader.is_pressed()?;
        if pressed != self.pressed {
            info!("Button {}", if pressed { "pressed" } else { "released" });
            self.pressed = pressed;
        }
        Ok(())
    }
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(io::stderr)
        .pretty()
        .init();
}
