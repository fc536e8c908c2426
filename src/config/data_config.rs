//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 요청 제한 관련 설정을 관리합니다.

use crate::config::auth_config::env_lookup;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경변수에서 현재 환경을 결정합니다. 기본값은 Production 입니다.
    pub fn current() -> Self {
        env_lookup("ENVIRONMENT")
            .map(|e| Self::from_str(&e))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프레임 응답과 state에 실리는 환경 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 외부에서 접근 가능한 인증 백엔드 기본 URL
    pub base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(7007);
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let base_url = lookup("AUTH_BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        Self { host, port, base_url }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .map(|v| {
                v.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                    100
                })
            })
            .unwrap_or(100);

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .map(|v| {
                v.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                    200
                })
            })
            .unwrap_or(200);

        Self { per_second, burst_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::load_with(|_| None);

        assert_eq!(config.port, 7007);
        assert_eq!(config.bind_address(), "127.0.0.1:7007");
        assert_eq!(config.base_url, "http://localhost:7007");
    }

    #[test]
    fn test_rate_limit_invalid_values_use_defaults() {
        let config = RateLimitConfig::load_with(|key| match key {
            "RATE_LIMIT_PER_SECOND" => Some("lots".to_string()),
            "RATE_LIMIT_BURST_SIZE" => Some("40".to_string()),
            _ => None,
        });

        assert_eq!(config.per_second, 100);
        assert_eq!(config.burst_size, 40);
    }
}
