//! Kling JWT 签名
//!
//! 为 Kling 视频生成 API 生成短时效 Bearer token：
//! HS256 签名，有效期窗口为签发时刻 -5s 到 +1800s。
//! token 每次代理调用时重新生成，从不缓存或跨请求复用。

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// token 过期偏移（秒）
const EXPIRES_IN_SECS: i64 = 1800;

/// nbf 提前量（秒），容忍少量时钟偏差
const NOT_BEFORE_SKEW_SECS: i64 = 5;

/// Kling JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct KlingClaims {
    /// Access Key ID
    pub iss: String,
    /// 过期时刻（Unix 秒）
    pub exp: i64,
    /// 生效时刻（Unix 秒）
    pub nbf: i64,
}

/// 生成签名 token
///
/// 任一凭证为空时返回 `None`，调用方以空 Bearer 继续转发，
/// 由上游决定未鉴权访问的结果（既定契约，见 DESIGN.md）
pub fn sign_token(access_key: &str, secret_key: &str) -> Option<String> {
    if access_key.is_empty() || secret_key.is_empty() {
        return None;
    }

    let now = Utc::now().timestamp();
    let claims = KlingClaims {
        iss: access_key.to_string(),
        exp: now + EXPIRES_IN_SECS,
        nbf: now - NOT_BEFORE_SKEW_SECS,
    };

    match encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret_key.as_bytes()),
    ) {
        Ok(token) => Some(token),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to sign Kling token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn decode_claims(token: &str, secret: &str) -> KlingClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        decode::<KlingClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .expect("token must decode with the signing secret")
        .claims
    }

    #[test]
    fn test_token_validity_window() {
        let before = Utc::now().timestamp();
        let token = sign_token("ak-test", "sk-test").expect("credentials present");
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token, "sk-test");
        assert_eq!(claims.iss, "ak-test");
        assert_eq!(claims.exp - claims.nbf, 1805);
        // nbf 落在 [签发前 5 秒, 签发后] 区间
        assert!(claims.nbf >= before - 5);
        assert!(claims.nbf <= after);
    }

    #[test]
    fn test_absent_iff_credential_missing() {
        assert!(sign_token("", "").is_none());
        assert!(sign_token("ak", "").is_none());
        assert!(sign_token("", "sk").is_none());
        assert!(sign_token("ak", "sk").is_some());
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = sign_token("ak", "right-secret").unwrap();
        let result = decode::<KlingClaims>(
            &token,
            &DecodingKey::from_secret(b"wrong-secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
