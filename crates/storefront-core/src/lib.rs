pub mod app_config;
pub mod categories;
pub mod config;
pub mod filters;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{Category, CategoryImage};
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{FilterSelection, OptionInventory};
pub use products::{
    CollectionPage, Money, PageInfo, Product, ProductImage, ProductOption, ProductVariant,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
