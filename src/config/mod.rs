//! 配置管理模块
//!
//! 提供 INI / JSON 配置文件的定位、解析和类型化读取

pub mod loader;
pub mod manager;
pub mod types;

// 重新导出主要类型
pub use loader::{find_default_config, DEFAULT_INI_FILENAME, DEFAULT_JSON_FILENAME};
pub use manager::{ConfigManager, DEFAULT_LOGGER_SECTION};
pub use types::{ConfigFormat, LogFormat, LoggingSettings};
