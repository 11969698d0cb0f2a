use keystick::fake::{FakePlatform, RecordingIndicator, RecordingTelemetry, Rendered};
use keystick::{Compass, Direction, JoystickError, JoystickReader, ThresholdDirection};
use proptest::prelude::*;
use rstest::rstest;

fn configured(x: u16, y: u16, button: u8) -> JoystickReader<FakePlatform> {
    let mut reader = JoystickReader::new(FakePlatform::with_levels(x, y, button));
    reader.configure_default();
    reader
}

fn move_to(reader: &mut JoystickReader<FakePlatform>, x: u16, y: u16) {
    reader.platform_mut().set_analog(1, x);
    reader.platform_mut().set_analog(0, y);
}

#[test]
fn configured_flag_flips_on_configure_only() {
    let mut reader = JoystickReader::new(FakePlatform::new());
    assert!(!reader.is_configured());

    // pins without levels: reads fail, but the reader is still configured
    reader.configure(40, 41, 42);
    assert!(reader.is_configured());
    assert!(matches!(
        reader.classify_direction(),
        Err(JoystickError::PinRead { .. })
    ));
    assert!(reader.is_configured());
}

#[rstest]
#[case(1, true)]
#[case(0, false)]
#[case(2, false)]
#[case(255, false)]
fn pressed_only_on_exact_one(#[case] level: u8, #[case] pressed: bool) {
    let mut reader = configured(500, 500, level);
    assert_eq!(reader.is_pressed().unwrap(), pressed);
}

#[test]
fn raising_up_threshold_drops_up() {
    let mut reader = configured(500, 700, 0);
    assert_eq!(reader.classify_direction().unwrap(), Direction::Up);

    reader.override_threshold(ThresholdDirection::Up, 800);
    assert_eq!(reader.classify_direction().unwrap(), Direction::None);
}

#[test]
fn other_thresholds_survive_an_override() {
    let mut reader = configured(500, 500, 0);
    reader.override_threshold(ThresholdDirection::Down, 300);

    assert_eq!(reader.threshold(ThresholdDirection::Down), 300);
    assert_eq!(reader.threshold(ThresholdDirection::Up), 625);
    assert_eq!(reader.threshold(ThresholdDirection::Left), 175);
    assert_eq!(reader.threshold(ThresholdDirection::Right), 625);
}

#[test]
fn indicator_follows_the_stick() {
    let mut reader = configured(500, 500, 0);
    let mut indicator = RecordingIndicator::default();

    for (x, y) in [(500, 900), (500, 50), (50, 500), (900, 500), (500, 500)] {
        move_to(&mut reader, x, y);
        reader.report_direction_to_indicator(&mut indicator).unwrap();
    }

    assert_eq!(
        indicator.rendered,
        vec![
            Rendered::Arrow(Compass::North),
            Rendered::Arrow(Compass::South),
            Rendered::Arrow(Compass::West),
            Rendered::Arrow(Compass::East),
            Rendered::Blocked,
        ]
    );
}

#[test]
fn serial_telemetry_output() {
    let mut reader = configured(100, 1000, 1);
    let mut telemetry = keystick::output::SerialTelemetry::new(Vec::new());

    reader.report_to_telemetry(&mut telemetry).unwrap();
    reader.report_direction_to_telemetry(&mut telemetry).unwrap();

    let out = String::from_utf8(telemetry.into_inner()).unwrap();
    assert_eq!(out, "X:100\r\nY:1000\r\nB:1\r\nUp\r\n");
}

#[test]
fn unconfigured_reports_write_nothing() {
    let mut reader = JoystickReader::new(FakePlatform::with_levels(500, 500, 0));
    let mut telemetry = RecordingTelemetry::default();
    let mut indicator = RecordingIndicator::default();

    assert!(reader.report_to_telemetry(&mut telemetry).is_err());
    assert!(reader.report_direction_to_telemetry(&mut telemetry).is_err());
    assert!(reader.report_direction_to_indicator(&mut indicator).is_err());
    assert!(telemetry.values.is_empty());
    assert!(telemetry.lines.is_empty());
    assert!(indicator.rendered.is_empty());
}

#[test]
fn readers_do_not_share_state() {
    let mut first = configured(500, 700, 0);
    let mut second = configured(500, 700, 0);

    first.override_threshold(ThresholdDirection::Up, 900);

    assert_eq!(first.classify_direction().unwrap(), Direction::None);
    assert_eq!(second.classify_direction().unwrap(), Direction::Up);
}

proptest! {
    #[test]
    fn up_wins_regardless_of_x(x in 0u16..=1023, y in 626u16..=1023) {
        let mut reader = configured(x, y, 0);
        prop_assert_eq!(reader.classify_direction().unwrap(), Direction::Up);
    }

    #[test]
    fn left_when_vertical_is_neutral(x in 0u16..175, y in 175u16..=625) {
        let mut reader = configured(x, y, 0);
        prop_assert_eq!(reader.classify_direction().unwrap(), Direction::Left);
    }

    #[test]
    fn threshold_round_trips(index in 0usize..4, amount in 0u16..=1023) {
        let direction = ThresholdDirection::ALL[index];
        let mut reader = configured(500, 500, 0);
        reader.override_threshold(direction, amount);
        prop_assert_eq!(reader.threshold(direction), amount);
    }

    #[test]
    fn classification_is_repeatable(
        x in 0u16..=1023,
        y in 0u16..=1023,
        earlier_x in 0u16..=1023,
        earlier_y in 0u16..=1023,
    ) {
        // An earlier, different position must not influence later results
        let mut reader = configured(earlier_x, earlier_y, 0);
        reader.classify_direction().unwrap();

        move_to(&mut reader, x, y);
        let first = reader.classify_direction().unwrap();
        let second = reader.classify_direction().unwrap();
        prop_assert_eq!(first, second);

        let fresh = configured(x, y, 0).classify_direction().unwrap();
        prop_assert_eq!(first, fresh);
    }
}
