// Copyright (c) 2019 PETA Developers. All Rights Reserved.

/// A type representing a pre-issued PETA session token.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: String) -> Self {
        SessionToken(token)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<String> for SessionToken {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        SessionToken::new(token)
    }
}

impl<'a> From<&'a str> for SessionToken {
    fn from(token: &'a str) -> Self {
        SessionToken::new(token.to_string())
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

/// An authenticated PETA session.
///
/// The portal issues a cookie from its ticket endpoint; alternatively a
/// pre-issued bearer token may be supplied. Either way the session is
/// created once and never refreshed: an expired session surfaces as an
/// ordinary request failure on the next call.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Session {
    /// The `name=value` cookie pairs captured from the login response.
    Cookie(String),
    /// A pre-issued token, sent as `Authorization: Bearer <token>`.
    Token(SessionToken),
}
