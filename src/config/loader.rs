//! 配置加载器实现
//!
//! 负责定位默认配置文件并把 INI / JSON 内容解析为配置源

use crate::config::types::ConfigFormat;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// 默认 INI 配置文件名
pub const DEFAULT_INI_FILENAME: &str = "config.ini";

/// 默认 JSON 配置文件名
pub const DEFAULT_JSON_FILENAME: &str = "app_config.json";

/// 在指定目录中查找默认配置文件
///
/// JSON 文件优先于 INI 文件。
///
/// # 参数
/// * `dir` - 查找目录
///
/// # 返回
/// * `Result<(ConfigFormat, PathBuf)>` - 找到的文件格式和路径
pub fn find_default_config<P: AsRef<Path>>(dir: P) -> Result<(ConfigFormat, PathBuf)> {
    let dir = dir.as_ref();

    let json_path = dir.join(DEFAULT_JSON_FILENAME);
    if json_path.exists() {
        return Ok((ConfigFormat::Json, json_path));
    }

    let ini_path = dir.join(DEFAULT_INI_FILENAME);
    if ini_path.exists() {
        return Ok((ConfigFormat::Ini, ini_path));
    }

    Err(ConfigError::NotFound {
        ini: DEFAULT_INI_FILENAME.to_string(),
        json: DEFAULT_JSON_FILENAME.to_string(),
    }
    .into())
}

/// 解析配置内容
///
/// # 参数
/// * `format` - 内容格式
/// * `content` - 配置文件内容
///
/// # 返回
/// * `Result<::config::Config>` - 解析后的配置源
pub fn parse_source(format: ConfigFormat, content: &str) -> Result<::config::Config> {
    let source = ::config::Config::builder()
        .add_source(::config::File::from_str(content, format.as_file_format()))
        .build()
        .map_err(ConfigError::from)?;

    Ok(source)
}

/// 读取并解析配置文件
///
/// 文件不存在时只记录警告并返回空配置，所有读取都会落回默认值。
///
/// # 参数
/// * `format` - 文件格式
/// * `path` - 文件路径
///
/// # 返回
/// * `Result<::config::Config>` - 解析后的配置源
pub async fn load_source<P: AsRef<Path>>(format: ConfigFormat, path: P) -> Result<::config::Config> {
    let path = path.as_ref();

    if !path.exists() {
        log::warn!("找不到指定的配置文件 [{}]，使用默认值", path.display());
        let empty = ::config::Config::builder()
            .build()
            .map_err(ConfigError::from)?;
        return Ok(empty);
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::ParseError(format!("读取文件失败: {}", e)))?;

    let source = parse_source(format, &content)?;

    log::info!("成功加载配置文件: {} ({})", path.display(), format);

    Ok(source)
}
