//! Signed JWT assertions for the OAuth 2.0 JWT bearer grant (RFC 7523).

use base64::Engine;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use serde::Serialize;

use crate::error::GoogleDocsError;

use super::key::ServiceAccountKey;

/// Assertion lifetime in seconds. Google rejects anything over one hour.
const ASSERTION_LIFETIME: u64 = 3600;

#[derive(Serialize)]
struct Header<'a> {
    alg: &'static str,
    typ: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kid: Option<&'a str>,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

/// Build an RS256-signed assertion for `scope`, issued at `issued_at`
/// (seconds since the Unix epoch).
pub(crate) fn build_assertion(
    key: &ServiceAccountKey,
    private_key: &RsaPrivateKey,
    scope: &str,
    issued_at: u64,
) -> Result<String, GoogleDocsError> {
    let header = Header {
        alg: "RS256",
        typ: "JWT",
        kid: key.private_key_id.as_deref(),
    };
    let claims = Claims {
        iss: &key.client_email,
        scope,
        aud: &key.token_uri,
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME,
    };

    let signing_input = format!(
        "{}.{}",
        BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
        BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?)
    );
    let signature = sign_rs256(private_key, signing_input.as_bytes());

    Ok(format!(
        "{signing_input}.{}",
        BASE64_URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// RSASSA-PKCS1-v1_5 with SHA-256.
fn sign_rs256(private_key: &RsaPrivateKey, data: &[u8]) -> Box<[u8]> {
    let signing_key = SigningKey::<Sha256>::new(private_key.clone());
    signing_key.sign(data).to_bytes()
}
