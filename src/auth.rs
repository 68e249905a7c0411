use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::warn;

use crate::config::AuthConfig;
use crate::state::AppState;

/// HTTP Basic Auth gate in front of the dashboard routes. Single static
/// credential pair; anything else answers 401 with a challenge.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match header_value {
        Some(value) if credentials_match(value, &state.config.auth) => next.run(req).await,
        Some(_) => {
            warn!("basic auth rejected");
            challenge(&state.config.auth.realm, "Invalid credentials")
        }
        None => challenge(&state.config.auth.realm, "Authentication required"),
    }
}

fn credentials_match(header_value: &str, auth: &AuthConfig) -> bool {
    let Some(encoded) = header_value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = BASE64.decode(encoded.trim()) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };
    let Some((user, password)) = decoded.split_once(':') else {
        return false;
    };
    user == auth.user && password == auth.password
}

fn challenge(realm: &str, body: &'static str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{realm}\""))],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            user: "test".into(),
            password: "test".into(),
            realm: "test".into(),
        }
    }

    #[test]
    fn accepts_matching_credentials() {
        // "test:test"
        assert!(credentials_match("Basic dGVzdDp0ZXN0", &auth()));
    }

    #[test]
    fn rejects_wrong_password() {
        let encoded = BASE64.encode("test:wrong");
        assert!(!credentials_match(&format!("Basic {encoded}"), &auth()));
    }

    #[test]
    fn rejects_non_basic_scheme() {
        assert!(!credentials_match("Bearer dGVzdDp0ZXN0", &auth()));
    }

    #[test]
    fn rejects_garbage_base64() {
        assert!(!credentials_match("Basic not-base64!!", &auth()));
    }

    #[test]
    fn rejects_pair_without_separator() {
        let encoded = BASE64.encode("testtest");
        assert!(!credentials_match(&format!("Basic {encoded}"), &auth()));
    }
}
