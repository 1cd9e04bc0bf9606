//! Forbidden-domain index module.
//!
//! This module provides efficient forbidden-domain matching with:
//! - A label trie rooted at the top-level label
//! - O(k) lookup where k is the number of labels in the candidate
//! - Subsumption of longer forbidden entries by shorter ones at build time
//!
//! ## Example
//!
//! ```
//! use domain_guard::index::DomainIndex;
//!
//! let index = DomainIndex::from_names(["ya.ru", "com"]).unwrap();
//!
//! assert!(index.is_forbidden_name("ya.ru").unwrap());          // exact match
//! assert!(index.is_forbidden_name("m.ya.ru").unwrap());        // subdomain match
//! assert!(index.is_forbidden_name("mail.google.com").unwrap()); // subdomain of "com"
//! assert!(!index.is_forbidden_name("ya.com").unwrap());
//! ```

mod trie;

pub use trie::DomainIndex;
