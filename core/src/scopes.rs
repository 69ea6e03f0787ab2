//! Authorization scopes for the user endpoints.

use std::fmt;

/// Scopes to request in authorization endpoints.
///
/// The flags are normalized once, at construction, to match what the API
/// actually does with them:
///
/// - requesting `balance` or `discord` requires a base profile fetch, so
///   `profile` is forced on;
/// - requesting `email` makes the API drop the simultaneous profile fetch,
///   so `profile` is forced off (upstream quirk, preserved as documented).
///
/// The value is immutable after construction; there is no way to produce a
/// combination the API would reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scopes {
    profile: bool,
    email: bool,
    balance: bool,
    discord: bool,
}

impl Scopes {
    /// Build a scope set from the four raw flags, applying normalization.
    pub fn new(profile: bool, email: bool, balance: bool, discord: bool) -> Self {
        let mut profile = profile;
        if balance || discord {
            profile = true;
        }
        if email {
            profile = false;
        }
        Self {
            profile,
            email,
            balance,
            discord,
        }
    }

    pub fn profile(&self) -> bool {
        self.profile
    }

    pub fn email(&self) -> bool {
        self.email
    }

    pub fn balance(&self) -> bool {
        self.balance
    }

    pub fn discord(&self) -> bool {
        self.discord
    }

    /// The enabled scope names, in the wire order
    /// `profile, email, balance, discord`.
    pub fn as_list(&self) -> Vec<&'static str> {
        let flags = [
            ("profile", self.profile),
            ("email", self.email),
            ("balance", self.balance),
            ("discord", self.discord),
        ];
        flags.iter().filter(|(_, on)| *on).map(|(name, _)| *name).collect()
    }
}

impl Default for Scopes {
    /// Profile only, matching the API default.
    fn default() -> Self {
        Self::new(true, false, false, false)
    }
}

impl fmt::Display for Scopes {
    /// The comma-joined list the API expects in query and form parameters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_list().join(","))
    }
}
