//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB 카탈로그를 주 저장소로 사용하고 Redis를 통한 조회 캐싱을 지원합니다.
//! 서비스 계층은 구체 타입 대신 `Arc<dyn IdentityDirectory>`에 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::identity::CatalogIdentityDirectory;
//!
//! let directory: Arc<dyn IdentityDirectory> =
//!     Arc::new(CatalogIdentityDirectory::new(db, redis, IdentityConfig::from_env()));
//! ```

pub mod identity;
