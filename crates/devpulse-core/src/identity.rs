//! The authenticated identity a snapshot is computed for.

use std::fmt;

/// Login plus bearer credential. The login doubles as the cache key;
/// neither field is persisted beyond the request lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub login: String,
    token: String,
}

impl Identity {
    pub fn new(login: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            token: token.into(),
        }
    }

    /// The bearer credential for upstream calls.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The cache key for this identity.
    pub fn cache_key(&self) -> &str {
        &self.login
    }
}

// Keep the token out of debug output and logs.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("login", &self.login)
            .field("token", &"***")
            .finish()
    }
}
