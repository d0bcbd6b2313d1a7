//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scoring::ScoringMode;

/// 설정 파일 경로를 직접 지정하는 환경 변수
pub const CONFIG_PATH_ENV: &str = "HANGUL_DRILL_CONFIG";

/// 설정 파일 저장/파싱 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패: {0}")]
    Io(#[from] io::Error),
    #[error("설정 파일 파싱 실패: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("설정 직렬화 실패: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// hangul-drill 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DrillConfig {
    /// 진행도 계산 단위
    #[serde(default)]
    pub scoring_mode: ScoringMode,
    /// 결과를 JSON으로 출력할지
    #[serde(default = "default_json_output")]
    pub json_output: bool,
}

fn default_json_output() -> bool {
    false
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::default(),
            json_output: default_json_output(),
        }
    }
}

/// 설정 파일 경로: $HANGUL_DRILL_CONFIG, 없으면 ~/.config/hangul-drill/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangul-drill").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> DrillConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> DrillConfig {
    match read_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => DrillConfig::default(),
        Err(e) => {
            log::warn!("{}: {}, 기본 설정 사용", path.display(), e);
            DrillConfig::default()
        }
    }
}

/// 설정 파일을 읽어 파싱 (기본값 폴백 없음)
pub fn read_config(path: &Path) -> Result<DrillConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(ConfigError::Parse)
}

/// 설정 파일 저장
pub fn save_config(config: &DrillConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(config: &DrillConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, json)?;
    log::debug!("설정 저장: {}", path.display());
    Ok(())
}
