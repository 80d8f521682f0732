use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "typer";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    /// `config.json` under the platform config dir
    pub fn config_path() -> Option<PathBuf> {
        Self::project().map(|pd| pd.config_dir().join("config.json"))
    }

    /// Directory for `typer.log`; prefers `$HOME/.local/state/typer` like other state files
    pub fn log_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join(APP_NAME),
            )
        } else {
            Self::project().map(|pd| pd.data_local_dir().to_path_buf())
        }
    }
}
