//! 플랫폼 아이덴티티 토큰 클레임
//!
//! 리졸버가 결정한 아이덴티티를 프론트엔드와 다른 백엔드 플러그인에 전달하기 위한
//! JWT 페이로드입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 사용자 엔티티 참조 (`user:<namespace>/<id>`)
/// - `ent`: 소유권 판단에 쓰는 엔티티 참조 목록 (현재는 `sub` 하나)
/// - `iss`: 토큰 발급자
/// - `iat`/`exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityTokenClaims {
    pub sub: String,
    pub ent: Vec<String>,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl IdentityTokenClaims {
    /// `user:<namespace>/<id>` 형식의 엔티티 참조
    pub fn user_entity_ref(namespace: &str, id: &str) -> String {
        format!("user:{}/{}", namespace, id)
    }
}
