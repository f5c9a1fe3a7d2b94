//! # Queue-Pilot CLI
//!
//! Command-line interface for the Queue-Pilot message lifecycle demonstration.
//!
//! This module provides CLI commands for:
//! - Running the create, produce, consume demonstration
//! - Validating and displaying configuration
//! - Generating shell completions

use clap::{CommandFactory, Parser, Subcommand};
use config::{Config, Environment, File};
use queue_pilot_core::{run_demo, DemoConfig, DemoError, DemoReport, ReceiveOutcome};
use queue_pilot_runtime::{
    AwsSqsConfig, InMemoryConfig, ProviderConfig, QueueServiceFactory, ServiceError,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Structure
// ============================================================================

/// Queue-Pilot CLI - Point-to-point message queue demonstration
#[derive(Parser)]
#[command(name = "queue-pilot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Message queue lifecycle demonstration")]
#[command(
    long_about = "Queue-Pilot creates a queue, sends a numbered batch of JSON messages, and drains the queue by its reported depth"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "QUEUE_PILOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the queue demonstration
    Run {
        /// Queue name to create and use
        #[arg(short, long)]
        queue_name: Option<String>,

        /// Number of messages to send
        #[arg(short, long)]
        count: Option<u32>,

        /// Visibility timeout in seconds applied at queue creation
        #[arg(short, long)]
        visibility_timeout: Option<u32>,

        /// Queue provider to run against
        #[arg(short, long, value_enum)]
        provider: Option<ProviderKind>,
    },

    /// Validate and display configuration
    Config {
        /// Configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Queue providers selectable from the command line
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Local in-memory queues
    InMemory,
    /// Amazon SQS
    AwsSqs,
}

// ============================================================================
// CLI Error Types
// ============================================================================

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Queue service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Demo run failed: {0}")]
    Demo(#[from] DemoError),

    #[error("Invalid argument: {arg} - {message}")]
    InvalidArgument { arg: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to render configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

// ============================================================================
// Configuration Types
// ============================================================================

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Demonstration run settings
    pub demo: DemoConfig,

    /// Queue service selection and provider settings
    pub service: ServiceSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            service: ServiceSettings::default(),
        }
    }
}

/// Queue service settings
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Provider the demonstration runs against
    pub provider: ProviderKind,

    /// AWS SQS settings, used when the provider is aws-sqs
    pub aws: AwsSqsConfig,

    /// In-memory settings, used when the provider is in-memory
    pub in_memory: InMemoryConfig,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::InMemory,
            aws: AwsSqsConfig::default(),
            in_memory: InMemoryConfig::default(),
        }
    }
}

impl ServiceSettings {
    /// Build the provider configuration for the given provider choice.
    pub fn provider_config(&self, provider: ProviderKind) -> ProviderConfig {
        match provider {
            ProviderKind::AwsSqs => ProviderConfig::AwsSqs(self.aws.clone()),
            ProviderKind::InMemory => ProviderConfig::InMemory(self.in_memory.clone()),
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Main CLI entry point
pub async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logging
    initialize_logging(&cli)?;

    // Load configuration
    let config = load_configuration(cli.config.as_ref()).await?;

    // Execute command
    match cli.command {
        Commands::Run {
            queue_name,
            count,
            visibility_timeout,
            provider,
        } => {
            execute_run_command(queue_name, count, visibility_timeout, provider, &config)
                .await
        }
        Commands::Config { file, show } => execute_config_command(file, show, &config).await,
        Commands::Completions { shell } => execute_completions_command(shell).await,
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Initialize logging based on CLI arguments
fn initialize_logging(cli: &Cli) -> Result<(), CliError> {
    let filter =
        EnvFilter::try_new(&cli.log_level).map_err(|err| CliError::InvalidArgument {
            arg: "log-level".to_string(),
            message: err.to_string(),
        })?;

    // Diagnostics go to stderr; stdout carries the demonstration output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A repeated init keeps the subscriber that is already installed.
    if cli.json_logs {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }

    Ok(())
}

/// Load configuration from the default location, an explicit file, and the
/// environment, in that order of precedence.
async fn load_configuration(config_path: Option<&PathBuf>) -> Result<CliConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(default_path) = dirs::config_dir()
        .map(|dir| dir.join("queue-pilot").join("config.toml"))
    {
        builder = builder.add_source(File::from(default_path).required(false));
    }

    if let Some(path) = config_path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: path.clone() });
        }
        builder = builder.add_source(File::from(path.clone()));
    }

    builder = builder.add_source(
        Environment::with_prefix("QUEUE_PILOT")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let settings = builder.build()?;
    let config = settings.try_deserialize()?;
    Ok(config)
}

/// Execute run command
async fn execute_run_command(
    queue_name: Option<String>,
    count: Option<u32>,
    visibility_timeout: Option<u32>,
    provider: Option<ProviderKind>,
    config: &CliConfig,
) -> Result<(), CliError> {
    let mut demo = config.demo.clone();
    if let Some(queue_name) = queue_name {
        demo.queue_name = queue_name;
    }
    if let Some(count) = count {
        demo.message_count = count;
    }
    if let Some(visibility_timeout) = visibility_timeout {
        demo.visibility_timeout_seconds = visibility_timeout;
    }

    let provider = provider.unwrap_or(config.service.provider);
    info!(provider = ?provider, queue = %demo.queue_name, "starting demonstration run");

    println!("Queue Service Demonstration");
    println!("===========================");

    let service = QueueServiceFactory::create(config.service.provider_config(provider)).await?;
    let report = run_demo(service.as_ref(), &demo).await?;
    render_report(&report);

    Ok(())
}

/// Execute config command
async fn execute_config_command(
    file: Option<PathBuf>,
    show: bool,
    config: &CliConfig,
) -> Result<(), CliError> {
    if let Some(path) = file {
        if !path.exists() {
            return Err(CliError::Configuration(ConfigError::FileNotFound { path }));
        }
        let raw = std::fs::read_to_string(&path)?;
        let parsed: CliConfig = toml::from_str(&raw).map_err(ConfigError::InvalidFormat)?;
        println!("Configuration file {} is valid", path.display());
        if show {
            print_config(&parsed)?;
        }
        return Ok(());
    }

    if show {
        print_config(config)?;
    } else {
        println!("Configuration loaded successfully");
    }
    Ok(())
}

fn print_config(config: &CliConfig) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    println!("{rendered}");
    Ok(())
}

/// Execute completions command
async fn execute_completions_command(shell: clap_complete::Shell) -> Result<(), CliError> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

// ============================================================================
// Report Rendering
// ============================================================================

const MESSAGE_BANNER: &str = "********************************************";

/// Print the demonstration report in the console format.
fn render_report(report: &DemoReport) {
    println!("Queue created, url: {}", report.queue.url());

    for outcome in &report.send_outcomes {
        println!(
            "Message :{} Sent to queue. HTTP response code {}",
            outcome.message_id, outcome.status_code
        );
    }

    println!(
        "Approximate messages on queue: {}",
        report.drain.reported_depth
    );

    for outcome in &report.drain.outcomes {
        if let ReceiveOutcome::Delivered {
            service_message_id,
            message,
        } = outcome
        {
            println!("{MESSAGE_BANNER}");
            println!("Queue message id: {service_message_id}");
            println!("Message id: {}", message.id());
            println!("Description: {}", message.description());
            println!("Created date: {}", message.created_on());
        }
    }

    println!(
        "Demo complete: {} sent, {} received",
        report
            .send_outcomes
            .iter()
            .filter(|outcome| outcome.is_success())
            .count(),
        report.drain.delivered_count()
    );
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
