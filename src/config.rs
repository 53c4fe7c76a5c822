use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 챔버 초기 조건 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChamberSettings {
    /// 챔버 체적 [m³]
    pub initial_volume_m3: f64,
    /// 초기 온도 [°C]
    pub initial_temperature_c: f64,
    /// 초기 상대습도 [%]
    pub initial_relative_humidity_pct: f64,
}

impl Default for ChamberSettings {
    fn default() -> Self {
        Self {
            initial_volume_m3: 10.0,
            initial_temperature_c: 12.6968,
            initial_relative_humidity_pct: 70.0,
        }
    }
}

/// 외부 연동(목표값 조회/측정값 적재) 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// 목표값 조회 URL
    pub targets_url: String,
    /// 측정값 로그 파일 경로(JSON Lines)
    pub readings_path: Option<String>,
    /// 측정값 POST URL. 지정 시 파일 경로보다 우선한다.
    pub readings_url: Option<String>,
    /// 틱 주기 [s]
    pub tick_period_secs: u64,
    /// 적재/목표 재조회 주기 [s]
    pub sync_period_secs: u64,
    /// HTTP 타임아웃 [s]
    pub http_timeout_secs: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            targets_url: "http://localhost/api/targets".to_string(),
            readings_path: Some("readings.jsonl".to_string()),
            readings_url: None,
            tick_period_secs: 1,
            sync_period_secs: 10,
            http_timeout_secs: 5,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 표시 언어 (auto/ko/en)
    pub language: Option<String>,
    #[serde(default)]
    pub chamber: ChamberSettings,
    #[serde(default)]
    pub sync: SyncSettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
