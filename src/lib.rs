//! Domain Guard - a forbidden-domain matching engine for Rust
//!
//! This library decides, for candidate domain names, whether each one equals
//! or is a subdomain of any entry in a forbidden-domain list. It provides:
//! - Domain parsing into ordered label sequences
//! - A label trie index built once from the forbidden set
//! - Subsumption: shorter forbidden entries absorb longer ones at build time
//! - A checker facade with LRU verdict caching
//! - A line-oriented check protocol over any reader/writer
//!
//! # Example
//!
//! ```rust
//! use domain_guard::{CheckerOptions, DomainChecker};
//!
//! let forbidden = ["ya.ru", "maps.me", "m.ya.ru", "com"];
//! let checker = DomainChecker::new(forbidden, CheckerOptions::default()).unwrap();
//!
//! assert!(checker.is_forbidden("ya.ru").unwrap());          // exact
//! assert!(checker.is_forbidden("moscow.m.ya.ru").unwrap()); // subdomain
//! assert!(checker.is_forbidden("maps.com").unwrap());       // subdomain of "com"
//! assert!(!checker.is_forbidden("ya.com.ua").unwrap());
//! ```
//!
//! # Matching Semantics
//!
//! Domains are compared root-anchored: from the top-level (rightmost) label
//! inward. A candidate is forbidden iff some forbidden entry's full label
//! sequence is a root-aligned prefix of the candidate's (equality included).
//!
//! | Forbidden entry | Candidate | Verdict |
//! |-----------------|-----------|---------|
//! | `ya.ru` | `ya.ru` | forbidden (exact) |
//! | `ya.ru` | `m.ya.ru` | forbidden (subdomain) |
//! | `com` | `mail.google.com` | forbidden (subdomain) |
//! | `maps.google.com` | `google.com` | allowed (candidate is shorter) |
//! | `ya.ru` | `ya.com` | allowed |
//!
//! No normalization is applied: matching is case-sensitive and byte-exact,
//! and empty labels (consecutive, leading or trailing dots) are rejected as
//! malformed.

pub mod checker;
pub mod domain;
pub mod error;
pub mod index;
pub mod stream;

// Re-export commonly used items
pub use checker::{CheckerOptions, DomainChecker, DEFAULT_CACHE_SIZE};
pub use domain::Domain;
pub use error::{DomainGuardError, MalformedKind, Result};
pub use index::DomainIndex;
