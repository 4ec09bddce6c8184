//! Breach corpus lookup via the HIBP k-anonymity range API.
//!
//! Only the first 5 hex characters of the password's SHA-1 digest are ever
//! sent over the wire; the returned range of suffixes is scanned locally.

use async_trait::async_trait;
use data_encoding::HEXUPPER;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::types::BreachVerdict;

/// Range endpoint of the public corpus. SHA-1 is mandated by this API's
/// protocol, not a design choice.
const RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

/// Length of the hash prefix transmitted to the range API.
const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("range request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("range endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Source of breach-range bodies, keyed by hash prefix.
///
/// The seam exists so the verdict logic is testable without a live endpoint.
#[async_trait]
pub trait RangeLookup: Send + Sync {
    /// Fetches the raw `SUFFIX:COUNT` body for a 5-char uppercase hex prefix.
    async fn range(&self, prefix: &str) -> Result<String, BreachError>;
}

/// HTTP client for the public range API.
pub struct HibpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    pub fn new() -> Self {
        Self::with_base_url(RANGE_ENDPOINT)
    }

    /// Points the client at a different range endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HibpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RangeLookup for HibpClient {
    async fn range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = format!("{}/{}", self.base_url, prefix);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(BreachError::Status(resp.status()));
        }
        Ok(resp.text().await?)
    }
}

/// Splits the password's SHA-1 digest into the transmitted prefix and the
/// locally-matched suffix.
///
/// The digest is rendered as 40 uppercase hex characters and split 5/35.
pub fn hash_prefix_suffix(password: &SecretString) -> (String, String) {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let hex = HEXUPPER.encode(digest.as_slice());
    let (prefix, suffix) = hex.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Scans a range body for the given suffix.
///
/// Records are `SUFFIX:COUNT` lines; the count is unused here. Lines that do
/// not carry a suffix component simply never match, so a malformed body
/// degrades to `NotBreached` rather than raising.
pub fn scan_range_body(body: &str, suffix: &str) -> BreachVerdict {
    for line in body.lines() {
        if line.split(':').next() == Some(suffix) {
            return BreachVerdict::Breached;
        }
    }
    BreachVerdict::NotBreached
}

/// Checks a password against the breach corpus.
///
/// Hashes, splits, queries the range for the prefix, then matches the suffix
/// locally (case-sensitive, both sides uppercase).
///
/// # Errors
/// [`BreachError`] on transport failure or a non-success response status.
pub async fn check_password<L: RangeLookup + ?Sized>(
    lookup: &L,
    password: &SecretString,
) -> Result<BreachVerdict, BreachError> {
    let (prefix, suffix) = hash_prefix_suffix(password);
    let body = lookup.range(&prefix).await?;
    Ok(scan_range_body(&body, &suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
    const PASSWORD_PREFIX: &str = "5BAA6";
    const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    struct StubRange {
        reply: Result<String, reqwest::StatusCode>,
    }

    #[async_trait]
    impl RangeLookup for StubRange {
        async fn range(&self, _prefix: &str) -> Result<String, BreachError> {
            match &self.reply {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(BreachError::Status(*status)),
            }
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_hash_prefix_suffix_known_vector() {
        let (prefix, suffix) = hash_prefix_suffix(&secret("password"));
        assert_eq!(prefix, PASSWORD_PREFIX);
        assert_eq!(suffix, PASSWORD_SUFFIX);
        assert_eq!(prefix.len(), 5);
        assert_eq!(suffix.len(), 35);
    }

    #[test]
    fn test_scan_matching_suffix() {
        let body = format!(
            "0018A45C4D1DEF81644B54AB7F969B88D65:3\n{}:3730471\n011053FD0102E94D6AE2F8B83D76FAF94F6:1",
            PASSWORD_SUFFIX
        );
        assert_eq!(
            scan_range_body(&body, PASSWORD_SUFFIX),
            BreachVerdict::Breached
        );
    }

    #[test]
    fn test_scan_no_matching_suffix() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:3\n011053FD0102E94D6AE2F8B83D76FAF94F6:1";
        assert_eq!(
            scan_range_body(body, PASSWORD_SUFFIX),
            BreachVerdict::NotBreached
        );
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        let body = format!("{}:12", PASSWORD_SUFFIX.to_lowercase());
        assert_eq!(
            scan_range_body(&body, PASSWORD_SUFFIX),
            BreachVerdict::NotBreached
        );
    }

    #[test]
    fn test_scan_tolerates_malformed_lines() {
        // Garbage lines never match and never raise.
        let body = "not-a-record\n\n:::\nxyz";
        assert_eq!(
            scan_range_body(body, PASSWORD_SUFFIX),
            BreachVerdict::NotBreached
        );
    }

    #[test]
    fn test_scan_matches_count_free_line() {
        // A bare suffix with no count still matches: split(':') yields the
        // whole line as the first component.
        let body = PASSWORD_SUFFIX.to_string();
        assert_eq!(
            scan_range_body(&body, PASSWORD_SUFFIX),
            BreachVerdict::Breached
        );
    }

    #[tokio::test]
    async fn test_check_password_breached() {
        let stub = StubRange {
            reply: Ok(format!("{}:42", PASSWORD_SUFFIX)),
        };
        let verdict = check_password(&stub, &secret("password")).await.unwrap();
        assert_eq!(verdict, BreachVerdict::Breached);
    }

    #[tokio::test]
    async fn test_check_password_not_breached() {
        let stub = StubRange {
            reply: Ok("0018A45C4D1DEF81644B54AB7F969B88D65:3".to_string()),
        };
        let verdict = check_password(&stub, &secret("password")).await.unwrap();
        assert_eq!(verdict, BreachVerdict::NotBreached);
    }

    /// Serves one canned HTTP response on a local socket and returns the
    /// base URL to point [`HibpClient`] at.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_hibp_client_end_to_end_breached() {
        let body = format!("0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n{PASSWORD_SUFFIX}:3730471");
        let base = serve_once("HTTP/1.1 200 OK", body).await;

        let client = HibpClient::with_base_url(base);
        let verdict = check_password(&client, &secret("password")).await.unwrap();
        assert_eq!(verdict, BreachVerdict::Breached);
    }

    #[tokio::test]
    async fn test_hibp_client_surfaces_server_error() {
        let base = serve_once("HTTP/1.1 500 Internal Server Error", String::new()).await;

        let client = HibpClient::with_base_url(base);
        let err = check_password(&client, &secret("password"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BreachError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }

    #[tokio::test]
    async fn test_check_password_propagates_status_error() {
        let stub = StubRange {
            reply: Err(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        };
        let err = check_password(&stub, &secret("password"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BreachError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
