use std::env;
use std::path::PathBuf;

/// Resolved run configuration.
///
/// Two options drive a run: where the export lives, and whether to skip
/// extraction and normalization by resuming from the saved checkpoint.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_path: Option<PathBuf>,
    pub use_checkpoint: bool,
    pub assets_dir: PathBuf,
}

impl RunConfig {
    pub fn new(
        source_path: Option<PathBuf>,
        use_checkpoint: bool,
        assets_dir: Option<PathBuf>,
    ) -> Self {
        let assets_dir = assets_dir.unwrap_or_else(default_assets_dir);
        Self {
            source_path,
            use_checkpoint,
            assets_dir,
        }
    }

    /// Normalized table snapshot, written after the chain and read back by
    /// `--use-checkpoint` runs.
    pub fn checkpoint_path(&self) -> PathBuf {
        self.assets_dir.join("transformed_data.csv")
    }

    /// Daily aggregate snapshot handed to the external renderer.
    pub fn aggregate_path(&self) -> PathBuf {
        self.assets_dir.join("plot_data.csv")
    }
}

/// Default assets directory: `CHAT_ASSETS_DIR` when set, `assets` otherwise.
pub fn default_assets_dir() -> PathBuf {
    try_load_dotenv();
    env::var("CHAT_ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"))
}

fn try_load_dotenv() {
    // Try locations in order of preference:

    // 1. Current directory (for development)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // 2. ~/.config/analyze-chat/.env (standard config location)
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("analyze-chat").join(".env");
        if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
            return;
        }
    }

    // 3. ~/.env (home directory)
    if let Some(home_dir) = dirs::home_dir() {
        let home_path = home_dir.join(".env");
        if home_path.exists() {
            let _ = dotenvy::from_path(&home_path);
        }
    }

    // If none found, that's okay - the defaults apply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_assets_dir_wins() {
        let config = RunConfig::new(None, true, Some(PathBuf::from("/tmp/run")));
        assert_eq!(config.checkpoint_path(), PathBuf::from("/tmp/run/transformed_data.csv"));
        assert_eq!(config.aggregate_path(), PathBuf::from("/tmp/run/plot_data.csv"));
    }

    #[test]
    fn test_snapshot_files_live_in_assets_dir() {
        let config = RunConfig::new(Some(PathBuf::from("raw.json")), false, None);
        assert!(config.checkpoint_path().ends_with("transformed_data.csv"));
        assert!(config.aggregate_path().ends_with("plot_data.csv"));
    }
}
