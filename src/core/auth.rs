use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, Response, header},
    middleware::Next,
};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Name of the cookie carrying the pilot session token
pub const SESSION_COOKIE: &str = "pilot_session";

pub const MSG_AUTH_REQUIRED: &str = "Authentication required";
pub const MSG_SESSION_EXPIRED: &str = "Session expired";
pub const MSG_INVALID_SESSION: &str = "Invalid session";

// contenuto del token di sessione del pilota
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // pilot id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: usize,
    pub exp: usize,
}

/// Pilot identity resolved by [`authentication_middleware`], available to
/// handlers as an `Extension`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPilot {
    pub pilot_id: i64,
}

#[instrument(skip(secret, email), fields(pilot_id = %pilot_id))]
pub fn encode_jwt(
    pilot_id: i64,
    email: Option<&str>,
    secret: &str,
    ttl: Duration,
) -> Result<String, JwtError> {
    debug!("Encoding pilot session token");
    let now = Utc::now();
    let claims = Claims {
        sub: pilot_id.to_string(),
        email: email.map(str::to_string),
        iat: now.timestamp().max(0) as usize,
        exp: (now + ttl).timestamp().max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .inspect_err(|e| error!("Failed to encode session token: {:?}", e))
}

#[instrument(skip(token, secret))]
pub fn decode_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>, JwtError> {
    debug!("Decoding pilot session token");
    decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
}

/// Pulls the session token out of the request.
///
/// The `Authorization: Bearer` header wins over the session cookie.
/// `Ok(None)` means no credentials were presented at all.
pub fn extract_token(headers: &HeaderMap) -> Result<Option<String>, AppError> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        let value = value.to_str().map_err(|_| {
            warn!("Authorization header is not valid ASCII");
            AppError::unauthorized(MSG_INVALID_SESSION)
        })?;
        let mut parts = value.split_whitespace();
        return match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Ok(Some(token.to_string()))
            }
            _ => {
                warn!("Malformed authorization header");
                Err(AppError::unauthorized(MSG_INVALID_SESSION))
            }
        };
    }

    // other cookies on the domain may carry non-ASCII values, so only the
    // session pair itself has to be valid UTF-8
    let token = headers
        .get_all(header::COOKIE)
        .iter()
        .flat_map(|value| value.as_bytes().split(|b| *b == b';'))
        .find_map(|pair| {
            let eq = pair.iter().position(|b| *b == b'=')?;
            let (name, value) = (&pair[..eq], &pair[eq + 1..]);
            (name.trim_ascii() == SESSION_COOKIE.as_bytes()).then_some(value)
        })
        .and_then(|value| std::str::from_utf8(value.trim_ascii()).ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Ok(token)
}

/// Resolves a session token to the pilot it was issued for
pub fn resolve_pilot(token: &str, secret: &str) -> Result<AuthenticatedPilot, AppError> {
    let token_data = decode_jwt(token, secret).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => {
            warn!("Session token expired");
            AppError::unauthorized(MSG_SESSION_EXPIRED)
        }
        kind => {
            warn!("Session token rejected: {:?}", kind);
            AppError::unauthorized(MSG_INVALID_SESSION)
        }
    })?;

    let pilot_id = token_data.claims.sub.parse::<i64>().map_err(|_| {
        warn!("Session subject is not a pilot id: {}", token_data.claims.sub);
        AppError::unauthorized(MSG_INVALID_SESSION)
    })?;

    Ok(AuthenticatedPilot { pilot_id })
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = extract_token(req.headers())?.ok_or_else(|| {
        warn!("Request carries no session credentials");
        AppError::unauthorized(MSG_AUTH_REQUIRED)
    })?;

    let pilot = resolve_pilot(&token, &state.jwt_secret)?;
    info!("Pilot authenticated: {}", pilot.pilot_id);

    req.extensions_mut().insert(pilot);
    Ok(next.run(req).await)
}
