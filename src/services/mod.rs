//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 협력 객체를 `Arc<dyn Trait>`로 생성자에서 주입받습니다.
//! 실행 시에는 `main`에서 한 번 조립되어 `web::Data`로 핸들러에 공유됩니다.

pub mod auth;
