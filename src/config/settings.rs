//! Application settings loaded from environment variables.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use super::constants::{
    BASE_ENV_FILE, ENV_DB_PATH, ENV_GCP_PROJECT_ID, ENV_GITHUB_URL, ENV_PORT, LOCAL_ENV_FILE,
};

/// Application settings.
///
/// Fields are only reachable through accessors, so a constructed value never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    port: Option<u16>,
    database_path: Option<String>,
    cloud_project_id: Option<String>,
    external_url: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Missing and empty values become `None`; an unparseable port becomes `None`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            port: get(ENV_PORT).and_then(|v| v.trim().parse().ok()),
            database_path: get(ENV_DB_PATH),
            cloud_project_id: get(ENV_GCP_PROJECT_ID),
            external_url: get(ENV_GITHUB_URL),
        }
    }

    /// Resolve settings from a base env file, the given environment and an
    /// override env file, without touching the process environment.
    ///
    /// Precedence: base file < environment < override file. Missing files are skipped.
    pub fn from_layers<F>(
        base_file: &Path,
        override_file: &Path,
        env_lookup: F,
    ) -> Result<Self, dotenvy::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = read_env_file(base_file)?;
        let overrides = read_env_file(override_file)?;

        Ok(Self::from_lookup(|key| {
            overrides
                .get(key)
                .cloned()
                .or_else(|| env_lookup(key))
                .or_else(|| base.get(key).cloned())
        }))
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn database_path(&self) -> Option<&str> {
        self.database_path.as_deref()
    }

    pub fn cloud_project_id(&self) -> Option<&str> {
        self.cloud_project_id.as_deref()
    }

    pub fn external_url(&self) -> Option<&str> {
        self.external_url.as_deref()
    }
}

/// Populate the process environment from `.env` and then `.env.local`.
///
/// `.env` never replaces variables already set; `.env.local` replaces anything.
/// Returns the files that were actually loaded. Runs before tracing is
/// initialized, so malformed files are reported on stderr.
pub fn load_env_files() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    match dotenvy::dotenv() {
        Ok(path) => loaded.push(path),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Ignoring {}: {}", BASE_ENV_FILE, e),
    }

    match dotenvy::from_filename_override(LOCAL_ENV_FILE) {
        Ok(path) => loaded.push(path),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Ignoring {}: {}", LOCAL_ENV_FILE, e),
    }

    loaded
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, dotenvy::Error> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.collect(),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(e),
    }
}
