mod config;
mod error;
mod log_level;
mod logging_config;
mod login_config;
mod server_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use login_config::LoginConfig;
pub use server_config::ServerConfig;


const CONFIG_DIR_ENV: &str = "LG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".lg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_LOGIN_USERNAME: &str = "human";
const DEFAULT_LOGIN_PASSWORD: &str = "iamnotbot";
const DEFAULT_MIRROR_STATUS_CODE: bool = false;
