use serde::Deserialize;
use std::env;
use url::Url;
use super::SettingsError;

#[derive(Clone, Debug, Deserialize)]
pub struct ServerSettings {
    /// HTTP 포트 (기본값: 8080)
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// 요청을 전달할 검색 백엔드 주소 (기본값: http://localhost:9200)
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_http_port() -> u16 { 8080 }
fn default_backend_url() -> String { "http://localhost:9200".to_string() }

pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(name: &str, default: F) -> Result<T, SettingsError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}

impl ServerSettings {
    const MIN_PORT: u16 = 1;
    const MAX_PORT: u16 = 65535;

    fn parse_port(name: &str, value: &str) -> Result<u16, SettingsError> {
        let port = value.parse::<u16>().map_err(|_| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: value.to_string(),
            reason: format!("포트는 {}-{} 범위여야 합니다", Self::MIN_PORT, Self::MAX_PORT),
        })?;

        if port < Self::MIN_PORT {
            return Err(SettingsError::EnvVarInvalid {
                var_name: name.to_string(),
                value: value.to_string(),
                reason: "포트는 0이 될 수 없습니다".to_string(),
            });
        }

        Ok(port)
    }

    pub fn from_env() -> Result<Self, SettingsError> {
        let http_port = Self::parse_port(
            "PROXY_HTTP_PORT",
            &env::var("PROXY_HTTP_PORT").unwrap_or_else(|_| default_http_port().to_string())
        )?;

        let settings = Self {
            http_port,
            backend_url: env::var("PROXY_BACKEND_URL").unwrap_or_else(|_| default_backend_url()),
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.http_port < Self::MIN_PORT {
            return Err(SettingsError::InvalidConfig("HTTP 포트는 0이 될 수 없습니다".to_string()));
        }

        // 백엔드 연결은 평문 HTTP 커넥터만 사용한다
        let url = Url::parse(&self.backend_url).map_err(|e| SettingsError::InvalidConfig(
            format!("잘못된 백엔드 URL {}: {}", self.backend_url, e)
        ))?;
        if url.scheme() != "http" {
            return Err(SettingsError::InvalidConfig(
                format!("지원하지 않는 백엔드 스킴: {}", url.scheme())
            ));
        }
        if url.host_str().is_none() {
            return Err(SettingsError::InvalidConfig(
                format!("백엔드 URL에 호스트가 없습니다: {}", self.backend_url)
            ));
        }

        Ok(())
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            backend_url: default_backend_url(),
        }
    }
}
