use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::binder::binder::BinderConfig;
use crate::dom::templates::PageDefaults;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "endpoint-binder",
    version,
    about = "Keeps an image endpoint URL in sync with its parameter form"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: endpoint-binder.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append binder trace events (JSON lines) to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize the endpoint for a page fixture's current form state
    Render {
        /// Page fixture (JSON, or YAML by extension)
        #[arg(long)]
        page: String,

        /// Resolve the endpoint against this base URL instead of the page location
        #[arg(long)]
        base: Option<String>,
    },

    /// Replay timed user edits against a page fixture
    Replay {
        /// Page fixture (JSON, or YAML by extension)
        #[arg(long)]
        page: String,

        /// Replay script (YAML or JSON)
        #[arg(long)]
        events: String,

        /// Write the resulting page as JSON to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write a default page fixture
    Scaffold {
        /// Page kind: index or tiled
        #[arg(long, default_value = "index")]
        kind: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Synthesize the endpoint and download the image it names
    Fetch {
        /// Page fixture (JSON, or YAML by extension)
        #[arg(long)]
        page: String,

        /// Image service base URL (default: config, then the page location)
        #[arg(long)]
        base: Option<String>,

        /// Output file path (default: preview-<hash>.<fmt>)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `endpoint-binder.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub binder: BinderConfig,
    #[serde(default)]
    pub defaults: PageDefaults,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the image service used by `fetch`.
    pub base_url: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("endpoint-binder.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content),
        Err(_) => AppConfig::default(),
    }
}

pub fn parse_config(content: &str) -> AppConfig {
    match serde_yaml::from_str(content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring malformed config: {}", e);
            AppConfig::default()
        }
    }
}
