//! # Catalog Identity Directory
//!
//! 카탈로그 `User` 엔티티 컬렉션을 아이덴티티 디렉터리로 사용하는 리포지토리입니다.
//! 클레임을 어노테이션으로 매핑해 정확히 일치하는 사용자를 찾고, Redis에 결과를 캐시합니다.
//!
//! ## 문서 구조
//!
//! ```json
//! {
//!   "kind": "User",
//!   "name": "u-bob",
//!   "annotations": [
//!     { "key": "google.com/email", "value": "bob@co.com" }
//!   ]
//! }
//! ```
//!
//! 어노테이션 키에 `.`이 포함되므로(`google.com/email`) 중첩 문서 대신
//! `{key, value}` 배열로 저장하고 `$elemMatch`로 조회합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use serde::{Deserialize, Serialize};
use crate::{
    caching::redis::RedisClient,
    config::IdentityConfig,
    db::Database,
    errors::errors::{AppError, AppResult},
    repositories::identity::directory::{ClaimSet, DirectoryRecord, IdentityDirectory, EMAIL_CLAIM},
};

/// 카탈로그 어노테이션
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogAnnotation {
    pub key: String,
    pub value: String,
}

/// 카탈로그 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<CatalogAnnotation>,
}

impl From<CatalogUser> for DirectoryRecord {
    fn from(user: CatalogUser) -> Self {
        DirectoryRecord { id: user.name }
    }
}

/// MongoDB 카탈로그 기반 아이덴티티 디렉터리
pub struct CatalogIdentityDirectory {
    db: Arc<Database>,

    /// 조회 결과 캐시. 연결되지 않은 경우 캐시 없이 동작합니다.
    redis: Option<Arc<RedisClient>>,

    config: IdentityConfig,
}

impl CatalogIdentityDirectory {
    pub fn new(db: Arc<Database>, redis: Option<Arc<RedisClient>>, config: IdentityConfig) -> Self {
        Self { db, redis, config }
    }

    fn collection(&self) -> mongodb::Collection<CatalogUser> {
        self.db.get_database().collection::<CatalogUser>(&self.config.collection)
    }

    /// 클레임 집합에 대한 MongoDB 필터를 만듭니다.
    ///
    /// 모든 클레임이 정확히 일치해야 합니다.
    pub fn build_filter(email_annotation: &str, claims: &ClaimSet) -> AppResult<Document> {
        if claims.is_empty() {
            return Err(AppError::DirectoryLookupError("no claims given".to_string()));
        }

        let mut matchers = Vec::with_capacity(claims.len());
        for (claim, value) in claims {
            let annotation = match claim.as_str() {
                EMAIL_CLAIM => email_annotation,
                other => {
                    return Err(AppError::DirectoryLookupError(format!(
                        "unsupported claim for catalog lookup: {}",
                        other
                    )));
                }
            };
            matchers.push(doc! {
                "annotations": { "$elemMatch": { "key": annotation, "value": value } }
            });
        }

        let mut filter = doc! { "kind": "User" };
        if matchers.len() == 1 {
            for (key, value) in matchers.remove(0) {
                filter.insert(key, value);
            }
        } else {
            filter.insert("$and", matchers);
        }

        Ok(filter)
    }

    fn cache_key(claims: &ClaimSet) -> String {
        let joined = claims
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("identity:claims:{}", joined)
    }

    /// 어노테이션 조회용 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        let annotation_index = IndexModel::builder()
            .keys(doc! { "kind": 1, "annotations.key": 1, "annotations.value": 1 })
            .options(IndexOptions::builder()
                .name("kind_annotations".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([annotation_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl IdentityDirectory for CatalogIdentityDirectory {
    async fn lookup(&self, claims: &ClaimSet) -> AppResult<DirectoryRecord> {
        let filter = Self::build_filter(&self.config.email_annotation, claims)?;
        let cache_key = Self::cache_key(claims);

        // 캐시에서 먼저 확인
        if let Some(redis) = &self.redis {
            if let Ok(Some(cached)) = redis.get::<DirectoryRecord>(&cache_key).await {
                return Ok(cached);
            }
        }

        let user = self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DirectoryLookupError(e.to_string()))?
            .ok_or_else(|| AppError::DirectoryLookupError(format!(
                "no user found in catalog for {}",
                Self::cache_key(claims).trim_start_matches("identity:claims:")
            )))?;

        let record = DirectoryRecord::from(user);

        // 캐시 저장 실패는 조회 결과에 영향을 주지 않습니다
        if let Some(redis) = &self.redis {
            let _ = redis
                .set_with_expiry(&cache_key, &record, self.config.cache_ttl_seconds)
                .await;
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::identity::directory::email_claims;

    #[test]
    fn test_catalog_user_into_record() {
        let user = CatalogUser {
            id: None,
            kind: "User".to_string(),
            name: "u-bob".to_string(),
            annotations: vec![CatalogAnnotation {
                key: "google.com/email".to_string(),
                value: "bob@co.com".to_string(),
            }],
        };

        let record = DirectoryRecord::from(user);
        assert_eq!(record, DirectoryRecord { id: "u-bob".to_string() });
    }

    #[test]
    fn test_email_filter_matches_annotation() {
        let filter = CatalogIdentityDirectory::build_filter(
            "google.com/email",
            &email_claims("bob@co.com"),
        )
        .unwrap();

        assert_eq!(
            filter,
            doc! {
                "kind": "User",
                "annotations": { "$elemMatch": { "key": "google.com/email", "value": "bob@co.com" } }
            }
        );
    }

    #[test]
    fn test_filter_rejects_unknown_or_empty_claims() {
        let mut claims = ClaimSet::new();
        assert!(matches!(
            CatalogIdentityDirectory::build_filter("google.com/email", &claims),
            Err(AppError::DirectoryLookupError(_))
        ));

        claims.insert("phone".to_string(), "010".to_string());
        assert!(matches!(
            CatalogIdentityDirectory::build_filter("google.com/email", &claims),
            Err(AppError::DirectoryLookupError(ref m)) if m.contains("phone")
        ));
    }

    #[test]
    fn test_cache_key_is_stable() {
        let mut claims = email_claims("bob@co.com");
        assert_eq!(
            CatalogIdentityDirectory::cache_key(&claims),
            "identity:claims:email=bob@co.com"
        );

        claims.insert("a".to_string(), "1".to_string());
        assert_eq!(
            CatalogIdentityDirectory::cache_key(&claims),
            "identity:claims:a=1&email=bob@co.com"
        );
    }

    #[test]
    fn test_catalog_user_deserializes_without_optional_fields() {
        let user: CatalogUser = serde_json::from_str(r#"{"kind": "User", "name": "carol"}"#).unwrap();

        assert_eq!(user.name, "carol");
        assert!(user.annotations.is_empty());
    }
}
