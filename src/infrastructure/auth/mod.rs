//! Auth - 上游鉴权凭证生成

pub mod kling_token;

pub use kling_token::{sign_token, KlingClaims};
