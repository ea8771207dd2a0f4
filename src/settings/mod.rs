use std::{env, path::Path};
use serde::Deserialize;
use tracing::{debug, info};
use crate::filter::{EndpointPatternSet, PatternMatcher};

mod server;
pub mod logging;
mod filter;
mod error;

pub use server::ServerSettings;
pub use logging::{LogFormat, LogOutput, LogSettings};
pub use filter::FilterSettings;
pub use error::SettingsError;

pub type Result<T> = std::result::Result<T, SettingsError>;
pub use server::parse_env_var;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    // 서버 설정
    #[serde(default)]
    pub server: ServerSettings,

    // 로깅 설정
    #[serde(default)]
    pub logging: LogSettings,

    /// 검색 응답 필터 설정
    #[serde(default)]
    pub filter: FilterSettings,
}

impl Settings {
    /// `PROXY_CONFIG_FILE`이 지정되면 TOML 파일에서, 아니면 환경 변수에서 읽습니다.
    pub async fn load() -> Result<Self> {
        if let Ok(config_path) = env::var("PROXY_CONFIG_FILE") {
            Self::from_toml_file(&config_path).await
        } else {
            Self::from_env().await
        }
    }

    pub async fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| SettingsError::FileError {
            path: path.to_string_lossy().to_string(),
            error: e,
        })?;

        let settings = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "설정 파일 로드 완료");
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::ParseError { source: e })?;

        settings.validate()?;
        Ok(settings)
    }

    pub async fn from_env() -> Result<Self> {
        let settings = Self {
            server: ServerSettings::from_env()?,
            logging: LogSettings::from_env()?,
            filter: FilterSettings::from_env()?,
        };

        // 설정 생성 시점에 바로 검증
        settings.validate()?;
        Ok(settings)
    }

    /// 설정 유효성 검증
    ///
    /// 엔드포인트 패턴의 문법만 확인한다. 실제 필터는 서버 구성 시 한 번 만든다.
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        PatternMatcher::new(&EndpointPatternSet::from_list(self.filter.endpoint_pattern.iter().cloned()))?;

        debug!(
            backend = %self.server.backend_url,
            patterns = ?self.filter.endpoint_pattern,
            headers = ?self.filter.dedup_headers,
            "설정 검증 완료"
        );
        Ok(())
    }
}
