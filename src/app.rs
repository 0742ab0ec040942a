use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::core::{AccountStore, HabitStore};
use crate::error::{HfError, Result};
use crate::storage::{KvStore, SqliteStore};

/// Everything a command needs: config, the opened store, and the two core
/// facades. Built once per invocation and torn down with the process.
pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub store: Arc<dyn KvStore>,
    pub accounts: AccountStore,
    pub habits: HabitStore,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => Self::find_root()?,
        };
        let config = Config::load(cli.config.as_deref(), &root)?;

        if !config.display.color || cli.robot {
            colored::control::set_override(false);
        }

        let store: Arc<dyn KvStore> =
            Arc::new(SqliteStore::open(root.join(&config.storage.db_file))?);
        let accounts = AccountStore::open(Arc::clone(&store))?;
        let habits = HabitStore::open(Arc::clone(&store), accounts.current_user())?;

        Ok(Self {
            root,
            config,
            store,
            accounts,
            habits,
            robot_mode: cli.robot,
            verbosity: cli.verbose,
        })
    }

    /// Point the habit store at the current session's partition. Must run
    /// after every login/logout so no stale list stays visible.
    pub fn sync_partition(&mut self) -> Result<()> {
        let user = self.accounts.current_user().map(str::to_string);
        self.habits.set_active_user(user.as_deref())
    }

    fn find_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("HF_ROOT")
            && !root.is_empty()
        {
            return Ok(PathBuf::from(root));
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| HfError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("habitforge"))
    }
}
