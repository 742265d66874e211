use std::path::PathBuf;

use clap::Parser;

/// Terminal client for an AI presentation-draft backend.
#[derive(Debug, Parser)]
#[command(name = "slidedraft", version, about)]
pub struct Cli {
    /// Path to a config file. Defaults to the platform config directory;
    /// when given explicitly, the file must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL. Overrides both the config file and the
    /// SLIDEDRAFT_BACKEND_URL environment variable.
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,
}
