use act_client::app::commands::{self, CommandOutput};
use act_client::config::cli::Command;
use act_client::utils::{logger, validation::Validate};
use act_client::{ActClient, CliConfig, TomlConfig};
use clap::Parser;
use std::io::Write;

fn build_client(config: &CliConfig) -> act_client::Result<ActClient> {
    match &config.config {
        Some(path) => {
            tracing::debug!("Loading client configuration from {}", path.display());
            let file_config = config.merge_over(TomlConfig::from_file(path)?);
            file_config.validate()?;
            ActClient::from_config(&file_config)
        }
        None => {
            config.validate()?;
            ActClient::from_config(config)
        }
    }
}

fn write_output(command: &Command, output: CommandOutput) -> act_client::Result<()> {
    match output {
        CommandOutput::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        CommandOutput::Done(message) => println!("{}", message),
        CommandOutput::Diagram(svg) => match command {
            Command::Diagram {
                output: Some(path), ..
            } => {
                std::fs::write(path, &svg)?;
                tracing::info!("Wrote {} bytes to {}", svg.len(), path.display());
            }
            _ => std::io::stdout().write_all(&svg)?,
        },
    }
    Ok(())
}

async fn run(config: &CliConfig) -> act_client::Result<()> {
    let client = build_client(config)?;
    let output = commands::execute(&client, &config.command).await?;
    write_output(&config.command, output)
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("Command: {:?}", config.command);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}
