//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 아이덴티티 조회 캐시를 제공합니다.
//! Redis에 연결할 수 없으면 서버는 캐시 없이 기동합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
