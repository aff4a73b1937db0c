use crate::Error;
use regex::Regex;
use std::fmt;

const MAX_SLUG_LENGTH: usize = 50;

/// Lowercased organization or project slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

fn valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LENGTH
        && !slug.bytes().all(|b| b.is_ascii_digit())
        && Regex::new(r"^[a-z0-9_-]+$").map_or(false, |re| re.is_match(slug))
}

impl Slug {
    /// Trim and lowercase `raw`, then validate it.
    /// # Errors
    /// Returns [`Error::InvalidSlug`] if the normalized value is not a valid slug.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let slug = raw.trim().to_lowercase();

        if valid_slug(&slug) {
            Ok(Self(slug))
        } else {
            Err(Error::InvalidSlug(raw.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
