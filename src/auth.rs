use crate::error::ApiError;
use crate::models::Claims;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::env;

/// The single identity allowed past the guard.
pub const ADMIN_EMAIL: &str = "admin@admin.com";
pub const ADMIN_PASSWORD: &str = "admin";

fn secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string())
}

pub fn issue_token(claims: &Claims) -> Result<String, ApiError> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret().as_ref()),
    )?;
    Ok(token)
}

/// Decode a token and check its signature. Issued tokens carry no `exp`
/// claim, so expiry validation is switched off.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
}

/// Gate for protected endpoints: the token must verify and its email
/// claim must match the privileged address. Both failure modes produce
/// the same 403 response.
pub fn authorize(token: &str) -> Result<Claims, ApiError> {
    let claims = verify_token(token).map_err(|err| {
        tracing::debug!("token rejected: {err}");
        ApiError::InvalidToken
    })?;

    if claims.email != ADMIN_EMAIL {
        tracing::debug!("token rejected: email claim {:?} is not privileged", claims.email);
        return Err(ApiError::InvalidToken);
    }

    Ok(claims)
}
