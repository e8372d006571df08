use std::{
    env,
    io::{self, BufReader},
    path::PathBuf,
};

use pocketbook_config::{Config, ConfigManager};

use crate::cli::io::{LineSource, ReadlineSource, ScriptSource};
use crate::cli::output::Output;
use crate::errors::Result;

/// Overrides the directory holding `config.json` and, by default, the record files.
pub const HOME_ENV: &str = "POCKETBOOK_HOME";
/// When set, shells read plain stdin lines and print without colours.
pub const SCRIPT_ENV: &str = "POCKETBOOK_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Outcome of handling a single menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Process-level settings shared by both shells.
#[derive(Debug, Clone)]
pub struct ShellEnv {
    pub mode: CliMode,
    pub config: Config,
}

impl ShellEnv {
    pub fn new(mode: CliMode, config: Config) -> Self {
        Self { mode, config }
    }

    /// Resolves mode and configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let mode = if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        };

        let home = env::var_os(HOME_ENV).map(PathBuf::from);
        let manager = match &home {
            Some(home) => ConfigManager::with_base_dir(home),
            None => ConfigManager::platform_default(),
        };
        let mut config = manager.load()?;
        if config.data_root.is_none() {
            config.data_root = home;
        }
        tracing::debug!(
            config = %manager.config_path().display(),
            ?mode,
            "resolved shell environment"
        );
        Ok(Self::new(mode, config))
    }

    pub fn styled(&self) -> bool {
        self.mode == CliMode::Interactive && self.config.ui_color_enabled
    }

    pub fn line_source(&self) -> Result<Box<dyn LineSource>> {
        Ok(match self.mode {
            CliMode::Interactive => Box::new(ReadlineSource::new()?),
            CliMode::Script => Box::new(
                ScriptSource::new(BufReader::new(io::stdin())).with_echo(Box::new(io::stdout())),
            ),
        })
    }

    pub fn output(&self) -> Output<io::Stdout> {
        Output::stdout(self.styled())
    }
}
