//! Tests for the queue-pilot-cli library module.

use super::*;
use serial_test::serial;

#[test]
fn test_cli_parsing() {
    // Test basic command parsing
    let cli = Cli::try_parse_from([
        "queue-pilot",
        "run",
        "--queue-name",
        "OtherQueue",
        "--count",
        "5",
        "--provider",
        "in-memory",
    ]);
    assert!(cli.is_ok());

    let cli = cli.unwrap();
    match cli.command {
        Commands::Run {
            queue_name,
            count,
            provider,
            ..
        } => {
            assert_eq!(queue_name, Some("OtherQueue".to_string()));
            assert_eq!(count, Some(5));
            assert_eq!(provider, Some(ProviderKind::InMemory));
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn test_cli_global_defaults() {
    let cli = Cli::try_parse_from(["queue-pilot", "run"]).unwrap();

    assert_eq!(cli.log_level, "info");
    assert!(!cli.json_logs);
    assert!(cli.config.is_none());
    match cli.command {
        Commands::Run {
            queue_name,
            count,
            visibility_timeout,
            provider,
        } => {
            assert!(queue_name.is_none());
            assert!(count.is_none());
            assert!(visibility_timeout.is_none());
            assert!(provider.is_none());
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn test_config_defaults() {
    let config = CliConfig::default();

    assert_eq!(config.demo.queue_name, "DemoQueue");
    assert_eq!(config.demo.message_count, 100);
    assert_eq!(config.demo.visibility_timeout_seconds, 10);
    assert_eq!(config.service.provider, ProviderKind::InMemory);
    assert_eq!(config.service.aws.region, "us-east-1");
}

#[test]
fn test_provider_config_selection() {
    let settings = ServiceSettings::default();

    assert!(matches!(
        settings.provider_config(ProviderKind::InMemory),
        ProviderConfig::InMemory(_)
    ));
    assert!(matches!(
        settings.provider_config(ProviderKind::AwsSqs),
        ProviderConfig::AwsSqs(_)
    ));
}

#[test]
fn test_config_renders_as_toml_and_parses_back() {
    let config = CliConfig::default();

    let rendered = toml::to_string_pretty(&config).unwrap();
    let parsed: CliConfig = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, config);
}

#[tokio::test]
#[serial]
async fn test_load_configuration_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[demo]
queue_name = "FileQueue"
message_count = 12

[service]
provider = "aws-sqs"

[service.aws]
region = "eu-central-1"
"#,
    )
    .unwrap();

    let config = load_configuration(Some(&path)).await.unwrap();

    assert_eq!(config.demo.queue_name, "FileQueue");
    assert_eq!(config.demo.message_count, 12);
    // Values the file does not set keep their defaults.
    assert_eq!(config.demo.visibility_timeout_seconds, 10);
    assert_eq!(config.service.provider, ProviderKind::AwsSqs);
    assert_eq!(config.service.aws.region, "eu-central-1");
}

#[tokio::test]
async fn test_load_configuration_rejects_missing_file() {
    let path = PathBuf::from("/nonexistent/queue-pilot.toml");

    let result = load_configuration(Some(&path)).await;

    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[tokio::test]
#[serial]
async fn test_load_configuration_defaults_without_sources() {
    let config = load_configuration(None).await.unwrap();

    assert_eq!(config, CliConfig::default());
}

#[tokio::test]
#[serial]
async fn test_environment_overrides_configuration() {
    std::env::set_var("QUEUE_PILOT__DEMO__MESSAGE_COUNT", "7");

    let config = load_configuration(None).await.unwrap();

    std::env::remove_var("QUEUE_PILOT__DEMO__MESSAGE_COUNT");

    assert_eq!(config.demo.message_count, 7);
    assert_eq!(config.demo.queue_name, "DemoQueue");
}

#[test]
fn test_cli_error_messages() {
    let error = CliError::InvalidArgument {
        arg: "log-level".to_string(),
        message: "unknown directive".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid argument: log-level - unknown directive"
    );

    let error = CliError::Configuration(ConfigError::FileNotFound {
        path: PathBuf::from("/tmp/missing.toml"),
    });
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration file not found: /tmp/missing.toml"
    );
}
