//! 아이덴티티 디렉터리 계약
//!
//! 클레임 이름 → 클레임 값 매핑을 받아 로컬 아이덴티티 레코드를 돌려주는
//! 단일 함수 형태의 capability 입니다. 리졸버는 `Arc<dyn IdentityDirectory>`만 알고,
//! 실제 저장소(카탈로그 컬렉션)나 테스트 대역은 이 trait 뒤에 숨겨집니다.

use std::collections::BTreeMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppResult;

/// 이메일 클레임 이름
pub const EMAIL_CLAIM: &str = "email";

/// 디렉터리 조회 키 (클레임 이름 → 값, 이름 순 정렬)
pub type ClaimSet = BTreeMap<String, String>;

/// 이메일 하나로 구성된 조회 키
pub fn email_claims(email: &str) -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.insert(EMAIL_CLAIM.to_string(), email.to_string());
    claims
}

/// 디렉터리가 돌려주는 정규 아이덴티티 레코드
///
/// 토큰의 네임스페이스는 `IDENTITY_NAMESPACE` 설정을 따르므로 레코드는 id만 가집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    /// 정규 아이덴티티 id (카탈로그 사용자 이름)
    pub id: String,
}

/// 아이덴티티 디렉터리 조회
///
/// 찾지 못한 경우를 포함해 모든 실패는 `AppError::DirectoryLookupError`로 표현합니다.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    async fn lookup(&self, claims: &ClaimSet) -> AppResult<DirectoryRecord>;
}
