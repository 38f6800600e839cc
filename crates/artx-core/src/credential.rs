//! Caller identity presented to the remote service.

use std::fmt;

/// Either a usable bearer token or nothing.
///
/// An absent token and an empty token are the same thing here: both mean the
/// remote cannot know who we are, which changes how a 403 is classified.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credential {
    #[default]
    Anonymous,
    Token(String),
}

impl Credential {
    pub fn from_token<S: Into<String>>(token: Option<S>) -> Self {
        match token.map(Into::into) {
            Some(t) if !t.is_empty() => Credential::Token(t),
            _ => Credential::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Credential::Token(t) => Some(t),
            Credential::Anonymous => None,
        }
    }

    pub fn has_token(&self) -> bool {
        matches!(self, Credential::Token(_))
    }
}

// Never print the token itself.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Anonymous => f.write_str("Anonymous"),
            Credential::Token(_) => f.write_str("Token(<redacted>)"),
        }
    }
}
