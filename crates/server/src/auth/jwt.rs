use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::AuthUser;

/// Claims carried by the session token issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User identifier.
    pub sub: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Role identifiers exactly as issued; legacy aliases are not rewritten.
    #[serde(default)]
    pub authority: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        AuthUser {
            user_id: claims.sub,
            user_name: claims.name,
            email: claims.email,
            authority: claims.authority,
        }
    }
}

fn jwt_secret() -> Result<String, Error> {
    std::env::var("JWT_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ErrorKind::InvalidKeyFormat.into())
}

pub fn session_token_expiry_minutes() -> i64 {
    std::env::var("SESSION_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60)
}

/// Issue a session token for `user`. Used by trusted issuers and tests.
pub fn create_session_token(user: &AuthUser) -> Result<String, Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.user_id.clone(),
        name: user.user_name.clone(),
        email: user.email.clone(),
        authority: user.authority.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(session_token_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
}

/// Validate signature and expiry of a session token.
pub fn validate_session_token(token: &str) -> Result<Claims, Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
