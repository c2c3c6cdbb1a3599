//! OAuth2 scope list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Scopes requested when no others are configured.
pub const DEFAULT_SCOPES: &[&str] = &["tweet.read", "tweet.write", "users.read"];

/// A validated, ordered list of OAuth2 scope tokens.
///
/// Tokens are printable ASCII without spaces, double quotes or backslashes
/// (RFC 6749 section 3.3). Order is preserved and duplicates are dropped so the
/// `scope` parameter is stable for a given input.
///
/// # Example
///
/// ```
/// use xpost::Scopes;
///
/// let scopes = Scopes::new(["tweet.read", "tweet.write"]).unwrap();
/// assert_eq!(scopes.to_string(), "tweet.read tweet.write");
///
/// let parsed: Scopes = "tweet.read users.read".parse().unwrap();
/// assert_eq!(parsed.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scopes(Vec<String>);

impl Scopes {
    /// Create a scope list from individual tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or any token is malformed.
    pub fn new<I, S>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scopes: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.into();
            Self::validate_token(&token)?;
            if !scopes.contains(&token) {
                scopes.push(token);
            }
        }

        if scopes.is_empty() {
            return Err(InvalidInputError::Scope {
                value: String::new(),
                reason: "at least one scope is required".to_string(),
            }
            .into());
        }

        Ok(Self(scopes))
    }

    /// Returns true if `scope` is part of this list.
    pub fn contains(&self, scope: &str) -> bool {
        self.0.iter().any(|s| s == scope)
    }

    /// Returns the number of scope tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a scope list cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn validate_token(token: &str) -> Result<(), Error> {
        if token.is_empty() {
            return Err(InvalidInputError::Scope {
                value: token.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        // scope-token = 1*( %x21 / %x23-5B / %x5D-7E )
        if let Some(c) = token
            .chars()
            .find(|&c| !matches!(c, '\x21' | '\x23'..='\x5B' | '\x5D'..='\x7E'))
        {
            return Err(InvalidInputError::Scope {
                value: token.to_string(),
                reason: format!("invalid character {:?}", c),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for Scopes {
    fn default() -> Self {
        Self(DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl FromStr for Scopes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split_whitespace())
    }
}

impl TryFrom<String> for Scopes {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Scopes> for String {
    fn from(scopes: Scopes) -> Self {
        scopes.to_string()
    }
}
