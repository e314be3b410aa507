use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use devtools_history::{
    FileStore, KeyValueStore, MAX_HISTORY_ENTRIES, SqliteStore, UsageHistoryStore,
};
use std::path::PathBuf;
use tracing::debug;

pub const APP_NAME: &str = "devtools";

#[derive(Parser, Debug)]
#[command(name = "dth", author, version, about = "Track recently used developer tools", long_about = None)]
pub struct Cli {
    /// Directory holding the history store
    #[arg(long, env = "DEVTOOLS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(long, env = "DEVTOOLS_BACKEND", value_enum, default_value_t = Backend::File, global = true)]
    pub backend: Backend,

    /// Number of tools kept before the least recently used is evicted (1-10)
    #[arg(long, env = "DEVTOOLS_HISTORY_CAPACITY", default_value_t = MAX_HISTORY_ENTRIES, global = true)]
    pub capacity: usize,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    File,
    Sqlite,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record a use of a tool
    Record {
        tool_id: String,
        tool_name: String,
        tool_category: String,
    },
    /// Forget a tool
    Remove { tool_id: String },
    /// Delete the whole history
    Clear,
    /// List recently used tools
    Recent {
        #[arg(short, long, default_value_t = devtools_history::DEFAULT_LIMIT)]
        limit: usize,
    },
    /// List most used tools
    Top {
        #[arg(short, long, default_value_t = devtools_history::DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Exit with 0 if the tool is in the history, 1 otherwise
    Contains { tool_id: String },
    /// Summary of the history
    Stats,
    /// Print the stored log as JSON
    Dump,
}

impl Cli {
    /// Directory the backends write to: `--data-dir` or the XDG data home
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let xdg_dir =
            xdg::BaseDirectories::with_prefix(APP_NAME).context("failed get xdg directory")?;
        xdg_dir
            .create_data_directory("")
            .context("failed create data directory")
    }

    pub fn open_history(&self) -> Result<UsageHistoryStore<Box<dyn KeyValueStore>>> {
        let store: Box<dyn KeyValueStore> = match self.backend {
            Backend::File => {
                let dir = self.resolve_data_dir()?.join("history");
                Box::new(FileStore::open(dir).context("failed open file store")?)
            }
            Backend::Sqlite => {
                let dir = self.resolve_data_dir()?;
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("failed create {}", dir.display()))?;
                Box::new(
                    SqliteStore::open(dir.join("history.db")).context("failed open sqlite store")?,
                )
            }
        };
        debug!("history backend: {:?}", self.backend);

        Ok(UsageHistoryStore::new(store).with_capacity(self.capacity))
    }
}
