use std::env;
use std::path::PathBuf;

/// Environment variable holding extra directories to search for symbol dumps.
pub const SEARCH_PATH_ENV: &str = "DOCDOWN_PATH";

/// Runtime configuration for the resolver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directories searched, in order, for `<module>.json` dumps.
    pub search_path: Vec<PathBuf>,
}

impl Config {
    /// Build the search path from the working directory, `DOCDOWN_PATH`
    /// and the per-user data directory.
    pub fn from_env() -> Self {
        let mut search_path = vec![PathBuf::from(".")];

        if let Some(value) = env::var_os(SEARCH_PATH_ENV) {
            search_path.extend(env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()));
        }

        if let Some(data_dir) = dirs::data_dir() {
            search_path.push(data_dir.join("docdown"));
        }

        Self { search_path }
    }

    pub fn with_search_path(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
