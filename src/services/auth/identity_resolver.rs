//! # Identity Resolver
//!
//! 정규화된 프로필의 이메일을 로컬 아이덴티티 id로 매핑합니다.
//!
//! ## 처리 순서
//!
//! ```text
//! email 없음/공백 ──────────────► MissingClaimError (디렉터리 호출 없음)
//!      │
//!      ▼
//! directory.lookup({email: trim+lowercase})
//!      │ Ok(record), record.id 비어 있지 않음 ──► record.id
//!      │
//!      ▼ Err(_) 또는 빈 id
//! 경고 1건 기록 → email(trim) 로컬 파트 ──► 공백뿐이면 MissingClaimError
//! ```
//!
//! 로컬 파트 폴백은 도메인이 다르고 로컬 파트가 같은 계정끼리 충돌할 수 있는
//! 알려진 한계가 있습니다. 재시도는 하지 않습니다.

use std::sync::Arc;
use crate::domain::models::auth::{NormalizedProfile, ResolvedIdentity};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::identity::{email_claims, IdentityDirectory};
use crate::services::auth::warning_sink::WarningSink;
use crate::utils::string_utils::email_local_part;

const FALLBACK_WARNING: &str =
    "Failed to look up user in directory, falling back to email local part as identity";

pub struct IdentityResolver {
    directory: Arc<dyn IdentityDirectory>,
    warnings: Arc<dyn WarningSink>,
}

impl IdentityResolver {
    pub fn new(directory: Arc<dyn IdentityDirectory>, warnings: Arc<dyn WarningSink>) -> Self {
        Self { directory, warnings }
    }

    /// 프로필의 이메일로 아이덴티티를 결정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingClaimError` - 이메일이 없거나, 폴백 로컬 파트가 비어 있는 경우
    pub async fn resolve(&self, profile: &NormalizedProfile) -> AppResult<ResolvedIdentity> {
        let email = profile
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| AppError::MissingClaimError("profile contained no email".to_string()))?;

        let claims = email_claims(&email.trim().to_lowercase());

        let lookup_error = match self.directory.lookup(&claims).await {
            Ok(record) if !record.id.trim().is_empty() => {
                log::debug!("디렉터리 아이덴티티 확인: {}", record.id);
                return Ok(ResolvedIdentity { id: record.id });
            }
            Ok(_) => AppError::DirectoryLookupError("directory returned a record without id".to_string()),
            Err(e) => e,
        };

        self.warnings.warn(FALLBACK_WARNING, &lookup_error);

        let local_part = email_local_part(email.trim()).trim();
        if local_part.is_empty() {
            return Err(AppError::MissingClaimError(format!(
                "email {} has no local part to use as identity",
                email
            )));
        }

        Ok(ResolvedIdentity { id: local_part.to_string() })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::repositories::identity::{ClaimSet, DirectoryRecord};
    use super::*;

    /// 미리 정한 결과를 돌려주고 호출 인자를 기록하는 디렉터리
    pub struct FakeDirectory {
        outcome: Result<String, String>,
        pub calls: Mutex<Vec<ClaimSet>>,
    }

    impl FakeDirectory {
        pub fn found(id: &str) -> Self {
            Self { outcome: Ok(id.to_string()), calls: Mutex::new(Vec::new()) }
        }

        pub fn failing(message: &str) -> Self {
            Self { outcome: Err(message.to_string()), calls: Mutex::new(Vec::new()) }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl IdentityDirectory for FakeDirectory {
        async fn lookup(&self, claims: &ClaimSet) -> AppResult<DirectoryRecord> {
            self.calls.lock().unwrap().push(claims.clone());
            match &self.outcome {
                Ok(id) => Ok(DirectoryRecord { id: id.clone() }),
                Err(message) => Err(AppError::DirectoryLookupError(message.clone())),
            }
        }
    }
}
