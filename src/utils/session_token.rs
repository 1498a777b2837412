//! Opaque session token generation.

use base64::Engine as _;

/// Random bytes per token. 24 bytes encode to 32 URL-safe characters.
const TOKEN_LENGTH_BYTES: usize = 24;

/// Generates a cryptographically unpredictable session token.
///
/// The token is the session's primary key and travels in the `shortlyid`
/// cookie, so it must not be guessable from prior tokens.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_length() {
        assert_eq!(generate_token().len(), 32);
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut tokens = HashSet::new();
        for _ in 0..1000 {
            tokens.insert(generate_token());
        }
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_token_is_cookie_safe() {
        let token = generate_token();
        assert!(
            token
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }
}
