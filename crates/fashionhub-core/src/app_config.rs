use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// YAML file holding the seed professionals directory.
    pub directory_path: PathBuf,
    /// JSON file backing durable client storage (session token).
    pub token_path: PathBuf,
    /// How many leading directory results are shown as featured.
    pub featured_count: usize,
    /// Base URL of a real backend. The stub backend ignores it.
    pub api_url: Option<String>,
}
