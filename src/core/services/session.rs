use std::fmt;

/// Opaque credential issued by the authentication service.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Blank tokens are not credentials.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// The signed-in state of the client. Acquired at login, cleared at logout,
/// and passed explicitly to whatever needs to call the task store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<AuthToken>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(token: AuthToken) -> Self {
        Self { token: Some(token) }
    }

    pub fn from_stored(raw: Option<String>) -> Self {
        Self {
            token: raw.and_then(AuthToken::new),
        }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_rejected() {
        assert!(AuthToken::new("").is_none());
        assert!(AuthToken::new("   ").is_none());
        assert_eq!(AuthToken::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn stored_value_restores_session() {
        assert!(!Session::from_stored(None).is_authenticated());
        assert!(!Session::from_stored(Some(String::new())).is_authenticated());

        let session = Session::from_stored(Some("tok".into()));
        assert!(session.is_authenticated());
        assert_eq!(session.token().map(AuthToken::as_str), Some("tok"));
    }

    #[test]
    fn debug_output_hides_the_token() {
        let token = AuthToken::new("secret").unwrap();
        assert!(!format!("{token:?}").contains("secret"));
    }
}
