use std::path::PathBuf;

use directories::ProjectDirs;

pub const DEFAULT_SOURCE_URL: &str = "https://user-data-ff2ef.example-docs.app/v1";

/// Collection holding the customer request documents.
pub const REQUESTS_COLLECTION: &str = "userRequests";

/// Collection holding per-record status labels, keyed by record id.
pub const STATUS_COLLECTION: &str = "requestStatus";

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("", "", "request-desk")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

pub fn db_path() -> anyhow::Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("request-desk.db"))
}

/// Base URL of the hosted document store, overridable via `RECORD_SOURCE_URL`.
pub fn source_url() -> String {
    std::env::var("RECORD_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string())
}

#[derive(Debug, Clone)]
pub struct SteadfastConfig {
    pub api_key: String,
    pub secret_key: String,
}

#[derive(Debug, Clone)]
pub struct PathaoConfig {
    pub access_token: String,
    pub store_id: Option<String>,
}

/// Credentials for the courier services, read from the environment.
/// A service with incomplete credentials is simply absent.
#[derive(Debug, Clone, Default)]
pub struct CourierSettings {
    pub steadfast: Option<SteadfastConfig>,
    pub pathao: Option<PathaoConfig>,
}

impl CourierSettings {
    pub fn from_env() -> Self {
        let steadfast = match (
            std::env::var("STEADFAST_API_KEY"),
            std::env::var("STEADFAST_SECRET_KEY"),
        ) {
            (Ok(api_key), Ok(secret_key)) => Some(SteadfastConfig {
                api_key,
                secret_key,
            }),
            _ => None,
        };

        let pathao = std::env::var("PATHAO_ACCESS_TOKEN")
            .ok()
            .map(|access_token| PathaoConfig {
                access_token,
                store_id: std::env::var("PATHAO_STORE_ID").ok(),
            });

        Self { steadfast, pathao }
    }
}
