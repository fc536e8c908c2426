//! 인증 세션 모델

pub mod session;

pub use session::{AuthResponse, NormalizedProfile, ProviderTokenInfo, ResolvedIdentity};
