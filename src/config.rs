use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::VolumetricFlowUnit;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "flow_units.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드. "auto"면 시스템 로케일을 따른다.
    pub language: String,
    /// 입력 단위를 생략했을 때 쓰는 단위
    pub default_from: VolumetricFlowUnit,
    /// 출력 단위를 생략했을 때 쓰는 단위
    pub default_to: VolumetricFlowUnit,
    /// 출력 소수 자릿수(0~255). 없으면 f64 기본 출력.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_from: VolumetricFlowUnit::CubicMetersPerSecond,
            default_to: VolumetricFlowUnit::LitersPerMinute,
            precision: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Deserialize(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Deserialize(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Deserialize(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Deserialize(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "설정 로드");
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "설정 저장");
        Ok(())
    }
}
