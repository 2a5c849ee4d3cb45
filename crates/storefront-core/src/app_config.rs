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
    /// Handle of the metaobject every navigation tree hangs off.
    pub root_category_handle: String,
    /// Nesting limit applied while normalizing raw category records.
    pub max_category_depth: usize,
    /// Number of products requested per collection page.
    pub collection_page_size: usize,
    pub fixtures_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            root_category_handle: "hardware".to_string(),
            max_category_depth: 8,
            collection_page_size: 50,
            fixtures_dir: PathBuf::from("./fixtures"),
        }
    }
}
