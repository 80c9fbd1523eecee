//! # Client Request Tokens
//!
//! Idempotency tokens attached to write requests when the caller did not
//! supply one.

use base64::Engine;
use rand::RngCore;
use zeroize::Zeroizing;

/// Number of random bytes behind each token
pub const CLIENT_REQUEST_TOKEN_BYTES: usize = 32;

/// Generate a client request token: 32 bytes from the thread-local CSPRNG,
/// standard base64 (44 characters)
#[must_use]
pub fn generate_client_request_token() -> String {
    let mut bytes = Zeroizing::new([0u8; CLIENT_REQUEST_TOKEN_BYTES]);
    rand::thread_rng().fill_bytes(bytes.as_mut());
    base64::engine::general_purpose::STANDARD.encode(bytes.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decodes_to_32_bytes() {
        let token = generate_client_request_token();
        assert_eq!(token.len(), 44);

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&token)
            .unwrap();
        assert_eq!(decoded.len(), CLIENT_REQUEST_TOKEN_BYTES);
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: std::collections::HashSet<String> =
            (0..64).map(|_| generate_client_request_token()).collect();
        assert_eq!(tokens.len(), 64);
    }
}
