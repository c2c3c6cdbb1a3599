//! Post text type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Text for a new post.
///
/// The text is kept exactly as given: no trimming or normalization, so the
/// platform receives the same bytes the caller configured. Length is left to
/// the platform, which weighs URLs and some characters differently.
///
/// # Example
///
/// ```
/// use xpost::PostText;
///
/// let text = PostText::new("hi").unwrap();
/// assert_eq!(text.as_str(), "hi");
/// assert!(PostText::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostText(String);

impl PostText {
    /// Create post text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is blank.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.trim().is_empty() {
            return Err(InvalidInputError::PostText {
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for PostText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostText {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PostText {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PostText> for String {
    fn from(text: PostText) -> Self {
        text.0
    }
}

impl AsRef<str> for PostText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim() {
        let text = PostText::new("  hello\nworld ").unwrap();
        assert_eq!(text.as_str(), "  hello\nworld ");
    }

    #[test]
    fn rejects_blank() {
        assert!(PostText::new("").is_err());
        assert!(PostText::new(" \n\t").is_err());
    }

    #[test]
    fn long_text_is_left_to_the_platform() {
        let raw = format!("{} https://example.com/ {}", "a".repeat(200), "p".repeat(80));
        let text = PostText::new(raw.clone()).unwrap();
        assert_eq!(text.as_str(), raw);
        assert_eq!(text.char_count(), 302);
    }
}
