use comfort_monitor::adapters::{FixedHygrometer, LineConsole, ManualDelay, TextScreen};
use comfort_monitor::comfort::{ComfortRange, ComfortThresholds};
use comfort_monitor::config::{HUMIDITY_ROW_Y, TEMP_ROW_Y};
use comfort_monitor::rendering::{BANNER, COMFORT_WARNING, DISCOMFORT_MARKER};
use comfort_monitor::{Cycle, Monitor, MonitorConfig, MonitorError, Reading};

type TestMonitor = Monitor<TextScreen, FixedHygrometer, LineConsole<32>, ManualDelay>;

fn started(temperature: f32, humidity: f32) -> TestMonitor {
    let mut monitor = Monitor::new(
        TextScreen::new(),
        FixedHygrometer::new(temperature, humidity),
        LineConsole::new(),
        ManualDelay::new(),
        MonitorConfig::default(),
    );
    monitor.start().expect("display should come up");
    monitor
}

fn console_lines(monitor: &TestMonitor) -> Vec<String> {
    monitor.console().lines().map(str::to_owned).collect()
}

#[test]
fn test_startup_shows_banner_and_waits_for_sensor() {
    let monitor = started(22.0, 50.0);
    let screen = monitor.screen();
    assert!(screen.is_initialised());
    assert_eq!(screen.shown_row(TEMP_ROW_Y), Some(BANNER));
    assert_eq!(screen.clears(), 1);
    assert_eq!(screen.flushes(), 1);
    assert_eq!(monitor.delay().elapsed_ms(), 2000);
    assert_eq!(monitor.console().written(), 0);

    let (_, sensor, _, _) = monitor.release();
    assert!(sensor.is_begun());
    assert_eq!(sensor.reads(), 0);
}

#[test]
fn test_display_init_failure_is_fatal_and_logged() {
    let mut monitor = Monitor::new(
        TextScreen::failing(),
        FixedHygrometer::new(22.0, 50.0),
        LineConsole::<8>::new(),
        ManualDelay::new(),
        MonitorConfig::default(),
    );

    let error = monitor.start().unwrap_err();
    assert_eq!(error, MonitorError::DisplayInit);
    assert!(error.is_fatal());
    assert_eq!(monitor.console().last(), Some("SSD1306 allocation failed"));
    assert_eq!(monitor.screen().clears(), 0);
    assert_eq!(monitor.screen().flushes(), 0);
    assert_eq!(monitor.delay().elapsed_ms(), 0);

    let (_, sensor, _, _) = monitor.release();
    assert!(!sensor.is_begun());
}

#[test]
fn test_comfortable_cycle_has_no_warning_and_no_markers() {
    let mut monitor = started(22.0, 50.0);
    let cycle = monitor.run_cycle();

    assert_eq!(
        cycle,
        Cycle::Reported {
            reading: Reading::new(22.0, 50.0),
            comfortable: true,
        }
    );
    assert_eq!(
        console_lines(&monitor),
        ["Temperature: 22.00 °C | Humidity: 50.00 %"]
    );
    assert_eq!(monitor.screen().shown_row(TEMP_ROW_Y), Some("Temp: 22.0 C "));
    assert_eq!(
        monitor.screen().shown_row(HUMIDITY_ROW_Y),
        Some("Humidity: 50.0 % ")
    );
}

#[test]
fn test_hot_cycle_warns_exactly_once() {
    let mut monitor = started(30.0, 50.0);
    let cycle = monitor.run_cycle();

    assert!(matches!(cycle, Cycle::Reported { comfortable: false, .. }));
    assert_eq!(
        console_lines(&monitor),
        [
            "Temperature: 30.00 °C | Humidity: 50.00 %",
            COMFORT_WARNING,
        ]
    );
    assert_eq!(monitor.console().count(COMFORT_WARNING), 1);
}

#[test]
fn test_marker_flags_discomfort_per_value() {
    let mut monitor = started(30.0, 50.0);
    monitor.run_cycle();
    let screen = monitor.screen();
    assert_eq!(screen.shown_row(TEMP_ROW_Y), Some("Temp: 30.0 C !!"));
    assert_eq!(screen.shown_row(HUMIDITY_ROW_Y), Some("Humidity: 50.0 % "));

    monitor.sensor_mut().set(20.0, 35.5);
    monitor.run_cycle();
    let screen = monitor.screen();
    assert_eq!(screen.shown_row(TEMP_ROW_Y), Some("Temp: 20.0 C "));
    assert_eq!(screen.shown_row(HUMIDITY_ROW_Y), Some("Humidity: 35.5 % !!"));
}

#[test]
fn test_boundary_values_are_comfortable() {
    let mut monitor = started(18.0, 60.0);
    assert!(matches!(
        monitor.run_cycle(),
        Cycle::Reported { comfortable: true, .. }
    ));
    assert_eq!(monitor.console().count(COMFORT_WARNING), 0);
    assert!(!monitor
        .screen()
        .shown_rows()
        .any(|(_, text)| text.contains(DISCOMFORT_MARKER)));
}

#[test]
fn test_temperature_rendered_with_one_decimal() {
    let mut monitor = started(22.34, 50.0);
    monitor.run_cycle();
    assert_eq!(monitor.screen().shown_row(TEMP_ROW_Y), Some("Temp: 22.3 C "));
    assert_eq!(
        monitor.console().last(),
        Some("Temperature: 22.34 °C | Humidity: 50.00 %")
    );
}

#[test]
fn test_sensor_failure_shows_error_and_skips_evaluation() {
    for (temperature, humidity) in [(f32::NAN, 50.0), (22.0, f32::NAN), (f32::NAN, f32::NAN)] {
        let mut monitor = started(temperature, humidity);
        assert_eq!(monitor.run_cycle(), Cycle::SensorError);

        assert_eq!(console_lines(&monitor), ["Sensor Read Error"]);
        let screen = monitor.screen();
        assert_eq!(screen.shown_len(), 1);
        assert_eq!(screen.shown_row(TEMP_ROW_Y), Some("Sensor Read Error"));
    }
}

#[test]
fn test_sensor_failure_does_not_stop_the_loop() {
    let mut monitor = Monitor::new(
        TextScreen::new(),
        FixedHygrometer::failing(),
        LineConsole::<8>::new(),
        ManualDelay::new(),
        MonitorConfig::default(),
    );
    monitor.start().unwrap();
    assert_eq!(monitor.run_cycle(), Cycle::SensorError);
    assert_eq!(monitor.screen().clears(), 2);

    monitor.sensor_mut().set(21.0, 45.0);
    assert!(matches!(monitor.run_cycle(), Cycle::Reported { .. }));
    assert_eq!(monitor.screen().shown_row(TEMP_ROW_Y), Some("Temp: 21.0 C "));
}

#[test]
fn test_every_cycle_sleeps_the_interval() {
    let mut monitor = started(22.0, 50.0);
    let after_startup = monitor.delay().elapsed_ms();

    monitor.run_cycle();
    monitor.sensor_mut().set(f32::NAN, 50.0);
    monitor.run_cycle();

    assert_eq!(monitor.delay().elapsed_ms() - after_startup, 2 * 5000);
}

#[test]
fn test_repeated_cycles_are_identical() {
    let mut monitor = started(26.5, 71.0);

    monitor.run_cycle();
    let first_log = console_lines(&monitor);
    let first_frame: Vec<(i32, String)> = monitor
        .screen()
        .shown_rows()
        .map(|(y, text)| (y, text.to_owned()))
        .collect();

    for _ in 0..3 {
        let before = monitor.console().written();
        monitor.run_cycle();
        let written = (monitor.console().written() - before) as usize;
        let lines = console_lines(&monitor);
        assert_eq!(lines[lines.len() - written..], first_log[..]);

        let frame: Vec<(i32, String)> = monitor
            .screen()
            .shown_rows()
            .map(|(y, text)| (y, text.to_owned()))
            .collect();
        assert_eq!(frame, first_frame);
    }
}

#[test]
fn test_custom_config_is_honoured() {
    let config = MonitorConfig {
        thresholds: ComfortThresholds {
            temperature: ComfortRange::new(28.0, 32.0),
            humidity: ComfortRange::new(40.0, 60.0),
        },
        reading_interval_ms: 250,
        stabilize_ms: 0,
    };
    let mut monitor = Monitor::new(
        TextScreen::new(),
        FixedHygrometer::new(30.0, 50.0),
        LineConsole::<8>::new(),
        ManualDelay::new(),
        config,
    );
    monitor.start().unwrap();
    assert!(matches!(
        monitor.run_cycle(),
        Cycle::Reported { comfortable: true, .. }
    ));
    assert_eq!(monitor.delay().elapsed_ms(), 250);
    assert_eq!(monitor.config().reading_interval_ms, 250);
}
