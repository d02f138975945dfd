//! Access token exchange at the OAuth token endpoint.

use std::time::{SystemTime, UNIX_EPOCH};

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use tracing::info;
use ureq::Agent;

use crate::error::GoogleDocsError;

use super::jwt::build_assertion;
use super::key::ServiceAccountKey;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchange a signed service account assertion for an access token.
pub(crate) fn fetch_access_token(
    agent: &Agent,
    key: &ServiceAccountKey,
    scope: &str,
) -> Result<String, GoogleDocsError> {
    let private_key = key.signing_key()?;
    let assertion = build_assertion(key, &private_key, scope, now_secs())?;
    let body = form_body(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)]);

    info!("Requesting access token for {}", key.client_email);

    let response = agent
        .post(&key.token_uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .send(body.as_bytes())?;

    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(GoogleDocsError::Auth(format!(
            "token exchange failed with status {status}: {error_body}"
        )));
    }

    let token: TokenResponse = body_reader.read_json()?;
    if let Some(expires_in) = token.expires_in {
        info!("Access token granted, expires in {expires_in}s");
    }
    Ok(token.access_token)
}

/// Encode `application/x-www-form-urlencoded` pairs.
fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, NON_ALPHANUMERIC),
                utf8_percent_encode(v, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_encodes_grant() {
        let body = form_body(&[("grant_type", JWT_BEARER_GRANT), ("assertion", "a.b-c_d")]);
        assert_eq!(
            body,
            "grant%5Ftype=urn%3Aietf%3Aparams%3Aoauth%3Agrant%2Dtype%3Ajwt%2Dbearer&assertion=a%2Eb%2Dc%5Fd"
        );
    }

    #[test]
    fn test_token_response_parsing() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"ya29.x","expires_in":3599,"token_type":"Bearer"}"#)
                .unwrap();
        assert_eq!(token.access_token, "ya29.x");
        assert_eq!(token.expires_in, Some(3599));
    }
}
