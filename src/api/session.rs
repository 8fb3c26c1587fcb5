use std::fmt;

/// Credential attached to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth<'a> {
    /// No `Authorization` header at all.
    Anonymous,
    /// `Authorization: Bearer <token>`; the token need not be valid.
    Bearer(&'a str),
}

/// Bearer credential obtained from a successful login.
///
/// Created once per run and handed to every authenticated scenario; it is
/// never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::Bearer(&self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .finish()
    }
}
