pub mod token;

pub use token::IdentityTokenClaims;
