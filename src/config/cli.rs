use crate::domain::model::Variables;
use crate::domain::paging::PageRequest;
use crate::config::toml_config::TomlConfig;
use crate::domain::ports::{ConfigProvider, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "act")]
#[command(about = "Command line client for the process engine REST API")]
pub struct CliConfig {
    #[arg(long, env = "ACT_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[arg(long, env = "ACT_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[arg(
        long,
        global = true,
        help = "TOML file with a [client] section; flags given explicitly take precedence"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Accept-Language header [default: zh-CN,en_US]")]
    pub accept_language: Option<String>,

    #[arg(long = "timeout", global = true, help = "Request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List process definitions
    Definitions(PageArgs),
    /// Show one process definition
    Definition { id: String },
    /// Show process definition metadata
    DefinitionMeta { id: String },
    /// List process instances
    Instances(PageArgs),
    /// Show one process instance
    Instance { id: String },
    /// Start a process instance
    Start(StartArgs),
    /// Cancel a process instance
    Cancel { id: String },
    /// Set process instance variables
    SetVariables {
        id: String,
        #[arg(long = "var", value_parser = parse_variable, required = true)]
        vars: Vec<(String, serde_json::Value)>,
        #[arg(long, help = "Use the admin API")]
        admin: bool,
    },
    /// Download the process instance diagram as SVG
    Diagram {
        id: String,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List tasks
    Tasks(PageArgs),
    /// Show one task
    Task { id: String },
    /// Complete a task
    Complete { id: String },
    /// Claim a task for an assignee
    Claim { id: String, assignee: String },
    /// Assign a task to another user
    Assign { id: String, assignee: String },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub skip: Option<u32>,
    #[arg(long)]
    pub max: Option<u32>,
}

impl PageArgs {
    pub fn page(&self) -> Option<PageRequest> {
        let page = PageRequest {
            skip_count: self.skip,
            max_items: self.max,
        };
        (!page.is_empty()).then_some(page)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct StartArgs {
    #[arg(long, conflicts_with = "definition_id", required_unless_present = "definition_id")]
    pub key: Option<String>,
    #[arg(long)]
    pub definition_id: Option<String>,
    #[arg(long, requires = "key")]
    pub business_key: Option<String>,
    #[arg(long = "var", value_parser = parse_variable, requires = "key")]
    pub vars: Vec<(String, serde_json::Value)>,
}

pub fn variables(pairs: &[(String, serde_json::Value)]) -> Variables {
    pairs.iter().cloned().collect()
}

/// `name=value`; the value is taken as JSON when it parses, otherwise as a string.
pub fn parse_variable(raw: &str) -> std::result::Result<(String, serde_json::Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.trim().is_empty() {
        return Err(format!("variable name is empty in '{}'", raw));
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((name.trim().to_string(), value))
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }

    fn accept_language(&self) -> &str {
        self.accept_language
            .as_deref()
            .unwrap_or(DEFAULT_ACCEPT_LANGUAGE)
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl CliConfig {
    /// Layer the connection flags (or their environment variables) over a loaded file.
    pub fn merge_over(&self, mut file: TomlConfig) -> TomlConfig {
        let client = &mut file.client;
        if let Some(base_url) = &self.base_url {
            client.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            client.token = token.clone();
        }
        if let Some(accept_language) = &self.accept_language {
            client.accept_language = Some(accept_language.clone());
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            client.timeout_seconds = Some(timeout_seconds);
        }
        file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let base_url = validation::validate_required_field("base_url", &self.base_url)?;
        validation::validate_url("base_url", base_url)?;
        let token = validation::validate_required_field("token", &self.token)?;
        validation::validate_non_empty_string("token", token)?;
        validation::validate_positive_number("timeout", self.timeout_seconds(), 1)?;
        Ok(())
    }
}
