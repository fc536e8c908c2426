//! 세션 응답 조립
//!
//! 핸드셰이크 결과를 정규화하고 아이덴티티를 결정해 [`AuthResponse`]를 만듭니다.
//! 단계는 순서대로 실행되며 중간 결과를 돌려주지 않습니다.

use std::sync::Arc;
use crate::domain::models::auth::{AuthResponse, NormalizedProfile, ProviderTokenInfo};
use crate::domain::models::oauth::google_oauth_model::GoogleUserInfo;
use crate::errors::errors::AppResult;
use crate::services::auth::identity_resolver::IdentityResolver;
use crate::services::auth::profile_normalizer::normalize_profile;

pub struct SessionResponseBuilder {
    resolver: Arc<IdentityResolver>,
}

impl SessionResponseBuilder {
    pub fn new(resolver: Arc<IdentityResolver>) -> Self {
        Self { resolver }
    }

    /// 원본 프로필을 정규화한 뒤 응답을 조립합니다.
    pub async fn build(
        &self,
        provider_info: ProviderTokenInfo,
        raw_profile: &GoogleUserInfo,
    ) -> AppResult<AuthResponse> {
        let profile = normalize_profile(raw_profile, provider_info.id_token.as_deref())?;
        self.populate_identity(provider_info, profile).await
    }

    /// 정규화된 프로필에 아이덴티티를 붙입니다.
    pub async fn populate_identity(
        &self,
        provider_info: ProviderTokenInfo,
        profile: NormalizedProfile,
    ) -> AppResult<AuthResponse> {
        let identity = self.resolver.resolve(&profile).await?;

        Ok(AuthResponse {
            provider_info,
            profile,
            identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::errors::errors::AppError;
    use crate::services::auth::identity_resolver::testing::FakeDirectory;
    use crate::services::auth::warning_sink::testing::RecordingSink;

    fn provider_info() -> ProviderTokenInfo {
        ProviderTokenInfo {
            access_token: "ya29.token".to_string(),
            id_token: None,
            scope: "openid email profile".to_string(),
            expires_in_seconds: 3599,
        }
    }

    fn builder(directory: FakeDirectory) -> (SessionResponseBuilder, Arc<FakeDirectory>, Arc<RecordingSink>) {
        let directory = Arc::new(directory);
        let sink = Arc::new(RecordingSink::default());
        let resolver = Arc::new(IdentityResolver::new(directory.clone(), sink.clone()));
        (SessionResponseBuilder::new(resolver), directory, sink)
    }

    fn profile(email: Option<&str>, name: &str) -> NormalizedProfile {
        NormalizedProfile {
            display_name: Some(name.to_string()),
            email: email.map(str::to_string),
            picture_url: None,
        }
    }

    #[actix_web::test]
    async fn test_directory_match_builds_response() {
        let (builder, _, sink) = builder(FakeDirectory::found("u-bob"));

        let response = builder
            .populate_identity(provider_info(), profile(Some("bob@co.com"), "Bob"))
            .await
            .unwrap();

        assert_eq!(response.identity.id, "u-bob");
        assert_eq!(response.profile.display_name.as_deref(), Some("Bob"));
        assert_eq!(response.provider_info, provider_info());
        assert_eq!(sink.count(), 0);
    }

    #[actix_web::test]
    async fn test_directory_miss_uses_local_part() {
        let (builder, _, sink) = builder(FakeDirectory::failing("not found"));

        let response = builder
            .populate_identity(provider_info(), profile(Some("carol@co.com"), "Carol"))
            .await
            .unwrap();

        assert_eq!(response.identity.id, "carol");
        assert_eq!(sink.count(), 1);
    }

    #[actix_web::test]
    async fn test_missing_email_fails_without_lookup() {
        let (builder, directory, sink) = builder(FakeDirectory::found("u-bob"));

        let err = builder
            .populate_identity(provider_info(), profile(None, "Dan"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MissingClaimError(_)));
        assert_eq!(directory.call_count(), 0);
        assert_eq!(sink.count(), 0);
    }

    #[actix_web::test]
    async fn test_repeated_calls_are_identical() {
        let (builder, _, _) = builder(FakeDirectory::found("u-bob"));

        let first = builder
            .populate_identity(provider_info(), profile(Some("bob@co.com"), "Bob"))
            .await
            .unwrap();
        let second = builder
            .populate_identity(provider_info(), profile(Some("bob@co.com"), "Bob"))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_repeated_fallback_calls_are_identical() {
        let (builder, directory, sink) = builder(FakeDirectory::failing("not found"));

        let first = builder
            .populate_identity(provider_info(), profile(Some("carol@co.com"), "Carol"))
            .await
            .unwrap();
        assert_eq!(sink.count(), 1);

        let second = builder
            .populate_identity(provider_info(), profile(Some("carol@co.com"), "Carol"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.identity.id, "carol");
        assert_eq!(sink.count(), 2);
        assert_eq!(directory.call_count(), 2);
    }

    #[actix_web::test]
    async fn test_build_normalizes_raw_profile() {
        let (builder, _, _) = builder(FakeDirectory::found("u-bob"));
        let raw: GoogleUserInfo = serde_json::from_value(json!({
            "id": "1090",
            "email": "bob@co.com",
            "given_name": "Bob",
            "family_name": "Builder"
        }))
        .unwrap();

        let response = builder.build(provider_info(), &raw).await.unwrap();

        assert_eq!(response.profile.display_name.as_deref(), Some("Bob Builder"));
        assert_eq!(response.identity.id, "u-bob");
    }
}
