use std::io::Write;

use clap::Parser;

use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        logging: LoggingOverrides {
            log_level: Some("debug".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_are_valid() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    assert_eq!(settings.server.addr.port(), DEFAULT_PORT);
    assert_eq!(settings.server.service_name, DEFAULT_SERVICE_NAME);
    assert_eq!(
        settings.server.max_request_bytes.get() as u64,
        DEFAULT_MAX_REQUEST_BYTES
    );
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = LoggingOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_logging_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);
    let err = Settings::from_raw(raw).expect_err("zero port");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());
    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn blank_service_name_falls_back() {
    let mut raw = RawSettings::default();
    raw.server.service_name = Some("   ".to_string());
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.server.service_name, DEFAULT_SERVICE_NAME);
}

#[test]
fn config_file_is_layered_under_cli() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[server]\nport = 9100\nservice_name = \"テスト\"").expect("write config");

    let args = CliArgs::parse_from([
        "classprint",
        "--config-file",
        file.path().to_str().expect("utf-8 path"),
        "serve",
        "--server-host",
        "0.0.0.0",
    ]);
    let settings = load(&args).expect("settings load");

    assert_eq!(settings.server.addr.port(), 9100);
    assert_eq!(settings.server.addr.ip().to_string(), "0.0.0.0");
    assert_eq!(settings.server.service_name, "テスト");
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["classprint"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_render_arguments() {
    let args = CliArgs::parse_from([
        "classprint",
        "render",
        "lesson-plan-docx",
        "plan.yaml",
        "--output",
        "plan.docx",
        "--log-level",
        "warn",
    ]);

    match args.command.expect("render command") {
        Command::Render(render) => {
            assert_eq!(render.kind, RenderKind::LessonPlanDocx);
            assert_eq!(render.input.to_str(), Some("plan.yaml"));
            assert_eq!(
                render.output.as_deref().and_then(|path| path.to_str()),
                Some("plan.docx")
            );
            assert_eq!(render.logging.log_level.as_deref(), Some("warn"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
