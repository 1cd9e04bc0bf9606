use std::fmt;
use std::str::FromStr;

use crate::error::{DomainGuardError, MalformedKind, Result};

/// A parsed domain name: an ordered sequence of labels.
///
/// `labels()[0]` is the leftmost (most specific) label and the last element
/// is the top-level label, exactly as written in the raw string. No
/// normalization is performed: case, punycode and trailing dots are kept
/// as-is, so `"Ya.RU"` and `"ya.ru"` are distinct domains.
#[derive(Debug, Clone)]
pub struct Domain {
    labels: Vec<String>,
}

impl Domain {
    /// Parse a raw dotted domain string.
    ///
    /// Splits on ASCII `.` preserving order; every label is the exact
    /// substring between delimiters. Empty input and empty labels
    /// (leading/trailing dot, consecutive dots) are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(DomainGuardError::MalformedDomain {
                kind: MalformedKind::Empty,
                input: raw.to_string(),
            });
        }

        let mut labels = Vec::new();
        for label in raw.split('.') {
            if label.is_empty() {
                return Err(DomainGuardError::MalformedDomain {
                    kind: MalformedKind::EmptyLabel,
                    input: raw.to_string(),
                });
            }
            labels.push(label.to_string());
        }

        Ok(Self { labels })
    }

    /// Labels left-to-right as parsed, most specific first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Check if `self` is a strict subdomain of `other`.
    ///
    /// True iff `self` has strictly more labels than `other` and all of
    /// `other`'s labels, read from the top-level label inward, match the
    /// corresponding labels of `self`. A domain is never a subdomain of
    /// itself; use `==` for equality.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        if self.labels.len() <= other.labels.len() {
            return false;
        }
        root_aligned_prefix(&other.labels, &self.labels)
    }
}

/// Check that every label of `shorter`, root-anchored, matches `longer`.
fn root_aligned_prefix(shorter: &[String], longer: &[String]) -> bool {
    shorter
        .iter()
        .rev()
        .zip(longer.iter().rev())
        .all(|(lhs, rhs)| lhs == rhs)
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        // Root-anchored comparison: same label count and all labels equal
        // from the top-level label inward.
        self.labels.len() == other.labels.len()
            && root_aligned_prefix(&self.labels, &other.labels)
    }
}

impl Eq for Domain {}

impl FromStr for Domain {
    type Err = DomainGuardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("."))
    }
}
