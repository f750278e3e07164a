use crate::commands::Commands;

use cm_config::Config;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cm")]
#[command(about = "Export, import and migrate content between content hub environments")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Run without asking for confirmation
    #[arg(long, global = true)]
    pub(crate) force: bool,

    /// Number of items processed concurrently (overrides processing.parallel_limit)
    #[arg(long, global = true)]
    pub(crate) parallel_limit: Option<usize>,
}

impl Cli {
    /// Flags win over config.toml and CM_* variables.
    pub(crate) fn apply_overrides(&self, config: &mut Config) {
        if let Some(parallel_limit) = self.parallel_limit {
            config.processing.parallel_limit = parallel_limit;
        }
        if self.command.skip_missing_references() {
            config.processing.skip_missing_references = true;
        }
    }
}
