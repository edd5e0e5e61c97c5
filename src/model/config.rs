use std::collections::HashSet;

use thiserror::Error;

use crate::utils::secret_str::SecretString;

/// Minimum signing secret length. Anything shorter is open to brute force
/// attacks against the cookie signature.
pub const MIN_SECRET_LEN: usize = 30;

// Floor on distinct characters in the secret, rejects degenerate values
// like a single repeated character or a short word padded out.
const MIN_SECRET_DISTINCT_CHARS: usize = 8;

/// Session cookie configuration, built once at startup and never mutated.
///
/// Changing `secret` between deployments invalidates all previously issued
/// session cookies: they fail signature verification and are treated as
/// absent.
#[derive(Clone)]
pub struct SessionConfig {
    pub cookie_key: String,
    pub secret: SecretString,
    pub session_timeout: i64, // millis
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Secret is too short: {0} chars, min {1}")]
    SecretTooShort(usize, usize),
    #[error("Secret has too few distinct characters, use a random value")]
    WeakSecret(),
    #[error("Invalid cookie key: '{0}'")]
    InvalidCookieKey(String),
}

impl SessionConfig {
    pub fn load(
        cookie_key: &str,
        secret: SecretString,
        session_timeout: i64,
    ) -> Result<SessionConfig, Error> {
        if !is_cookie_token(cookie_key) {
            return Err(Error::InvalidCookieKey(cookie_key.to_string()));
        }
        let len = secret.len();
        if len < MIN_SECRET_LEN {
            return Err(Error::SecretTooShort(len, MIN_SECRET_LEN));
        }
        if distinct_chars(secret.reveal_secret()) < MIN_SECRET_DISTINCT_CHARS {
            return Err(Error::WeakSecret());
        }
        Ok(SessionConfig {
            cookie_key: cookie_key.to_string(),
            secret,
            session_timeout,
        })
    }
}

// RFC 6265 cookie names are HTTP tokens: printable ASCII without separators
fn is_cookie_token(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| {
            matches!(b,
                b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
                | b'^' | b'_' | b'`' | b'|' | b'~'
                | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
        })
}

fn distinct_chars(s: &str) -> usize {
    s.chars().collect::<HashSet<char>>().len()
}
