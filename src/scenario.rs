//! 평가 입력(시나리오) TOML 파일 처리.

use std::fs;
use std::path::{Path, PathBuf};

use crate::mixing::MixingInputs;

/// 시나리오 파일 처리 오류.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("시나리오 파일을 읽을 수 없습니다 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("시나리오 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("시나리오 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// TOML 문자열에서 입력을 읽는다.
pub fn parse_scenario(src: &str) -> Result<MixingInputs, ScenarioError> {
    Ok(toml::from_str(src)?)
}

/// 시나리오 파일을 읽는다.
pub fn load_scenario(path: &Path) -> Result<MixingInputs, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = parse_scenario(&content)?;
    log::info!(
        "시나리오 로드: {} ({:?}, {:?}, {})",
        path.display(),
        inputs.conduit_type,
        inputs.mixer_model,
        inputs.chemical
    );
    Ok(inputs)
}

/// 기본 입력값을 시나리오 템플릿 문자열로 만든다.
pub fn template() -> Result<String, ScenarioError> {
    Ok(toml::to_string_pretty(&MixingInputs::default())?)
}
