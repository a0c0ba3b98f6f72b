//! Client-specific configuration.
use std::env;
use std::path::PathBuf;

/// Settings owned by the terminal client rather than the runtime.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Name of the per-run log directory. Generated from the clock when unset.
    pub session_id: Option<String>,
    /// Root directory for logs instead of the platform cache directory.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// - `WUMPUS_SESSION_ID`
    /// - `WUMPUS_LOG_DIR`
    pub fn from_env() -> Self {
        Self {
            session_id: read_env("WUMPUS_SESSION_ID"),
            log_dir: read_env::<String>("WUMPUS_LOG_DIR").map(PathBuf::from),
        }
    }

    /// Root log directory: the override, else `<cache>/wumpus/logs`.
    pub fn log_root(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "wumpus")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| env::temp_dir().join("wumpus"))
            .join("logs")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
