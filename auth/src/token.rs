use std::fmt;

use rand::RngCore;
use serde::Serialize;

/// Number of random bytes backing each token.
const TOKEN_BYTES: usize = 32;

/// Opaque bearer token identifying a session.
///
/// Carries 256 bits of randomness, hex encoded. The value is the
/// credential itself, so `Debug` prints a placeholder and the type
/// deliberately implements `Serialize` but not `Deserialize`; inbound
/// tokens arrive as header strings and are compared against the stored
/// value, never parsed back into this type.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// View the token value for comparison or transmission to the client.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, yielding the raw value for persistence.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(<redacted>)")
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Generator for opaque session tokens.
///
/// Tokens are unguessable and collision-free for any realistic number
/// of sessions; uniqueness is additionally enforced by the session
/// store's token column.
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Create a new token generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh token from OS-seeded randomness.
    ///
    /// # Returns
    /// A 64-character hex token
    pub fn generate(&self) -> SessionToken {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        SessionToken(hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_token_is_hex_of_expected_length() {
        let token = TokenGenerator::new().generate();

        assert_eq!(token.as_str().len(), TOKEN_BYTES * 2);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_do_not_repeat() {
        let generator = TokenGenerator::new();
        let tokens: HashSet<String> = (0..100)
            .map(|_| generator.generate().into_string())
            .collect();

        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn test_debug_redacts_value() {
        let token = TokenGenerator::new().generate();
        let printed = format!("{:?}", token);

        assert!(!printed.contains(token.as_str()));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let token = SessionToken::from("deadbeef".to_string());
        let json = serde_json::to_string(&token).expect("Failed to serialize token");

        assert_eq!(json, "\"deadbeef\"");
    }
}
