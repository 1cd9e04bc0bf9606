/// Forbidden-domain index.
///
/// Builds a label trie over the forbidden set, rooted at the top-level
/// label, and answers membership queries with one HashMap lookup per
/// candidate label.
use std::collections::HashMap;

use log::debug;

use crate::domain::Domain;
use crate::error::Result;

/// Value of one trie mapping entry.
#[derive(Debug)]
enum LabelEntry {
    /// The path down to this label is itself a forbidden domain; every
    /// domain ending in it is forbidden and descent stops here.
    Terminus,
    /// The path is not forbidden by itself but longer domains rooted here
    /// might be.
    Continue(LabelNode),
}

/// One trie level: labels at the same depth from the top-level label.
#[derive(Debug, Default)]
struct LabelNode {
    children: HashMap<String, LabelEntry>,
}

/// Forbidden-domain index over a label trie.
///
/// Built once from the full forbidden set; read-only afterwards, so it can
/// be shared across threads without locking.
#[derive(Debug, Default)]
pub struct DomainIndex {
    root: LabelNode,
    len: usize,
}

impl DomainIndex {
    /// Build an index from parsed forbidden domains.
    ///
    /// Entries are inserted shortest first so that a shorter forbidden
    /// domain subsumes every longer entry sharing its root-aligned prefix;
    /// subsumed entries are pruned rather than inserted. Duplicates are
    /// idempotent.
    pub fn new(forbidden: impl IntoIterator<Item = Domain>) -> Self {
        let mut domains: Vec<Domain> = forbidden.into_iter().collect();
        // Shorter domains must be inserted before any domain they subsume;
        // a subsumed domain always has strictly more labels than its subsumer.
        domains.sort_by_key(Domain::label_count);

        let total = domains.len();
        let mut index = Self::default();
        for domain in &domains {
            index.insert(domain);
        }

        debug!(
            "built domain index: {} entries from {} forbidden domains ({} subsumed)",
            index.len,
            total,
            total - index.len
        );
        index
    }

    /// Build an index from raw domain strings.
    pub fn from_names<I, S>(forbidden: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = forbidden
            .into_iter()
            .map(|raw| Domain::parse(raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(domains))
    }

    /// Insert one forbidden domain, walking its labels from the top-level
    /// label to the most specific one.
    fn insert(&mut self, domain: &Domain) {
        let labels = domain.labels();
        let mut node = &mut self.root;

        for (depth, label) in labels.iter().rev().enumerate() {
            // A terminus on the path means this domain is already subsumed
            // by a shorter forbidden entry.
            if matches!(node.children.get(label), Some(LabelEntry::Terminus)) {
                return;
            }

            let last = depth + 1 == labels.len();
            if last {
                // Mark the path forbidden, discarding any existing subtree:
                // the shorter entry now forbids everything beneath it.
                node.children.insert(label.clone(), LabelEntry::Terminus);
                self.len += 1;
                return;
            }

            let entry = node
                .children
                .entry(label.clone())
                .or_insert_with(|| LabelEntry::Continue(LabelNode::default()));
            node = match entry {
                LabelEntry::Continue(child) => child,
                // Unreachable after the terminus check above; treat as subsumed.
                LabelEntry::Terminus => return,
            };
        }
    }

    /// Check if the candidate equals, or is a subdomain of, any forbidden
    /// domain.
    pub fn is_forbidden(&self, candidate: &Domain) -> bool {
        let mut node = &self.root;
        for label in candidate.labels().iter().rev() {
            match node.children.get(label) {
                // Candidate's root-aligned prefix matches a forbidden entry;
                // any remaining labels are irrelevant.
                Some(LabelEntry::Terminus) => return true,
                Some(LabelEntry::Continue(child)) => node = child,
                None => return false,
            }
        }
        false
    }

    /// Check a raw domain string against the index.
    pub fn is_forbidden_name(&self, raw: &str) -> Result<bool> {
        Ok(self.is_forbidden(&Domain::parse(raw)?))
    }

    /// Number of effective (non-subsumed) forbidden entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index holds no forbidden entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(names: &[&str]) -> DomainIndex {
        DomainIndex::from_names(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_empty_index() {
        let index = DomainIndex::new([]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(!index.is_forbidden_name("ya.ru").unwrap());
    }

    #[test]
    fn test_exact_match() {
        let index = index_of(&["ya.ru"]);
        assert!(index.is_forbidden_name("ya.ru").unwrap());
    }

    #[test]
    fn test_unrelated_domain() {
        let index = index_of(&["ya.ru"]);
        assert!(!index.is_forbidden_name("ya.com").unwrap());
    }

    #[test]
    fn test_subdomain_of_tld_entry() {
        let index = index_of(&["com"]);
        assert!(index.is_forbidden_name("com").unwrap());
        assert!(index.is_forbidden_name("google.com").unwrap());
        assert!(index.is_forbidden_name("mail.google.com").unwrap());
        assert!(!index.is_forbidden_name("google.org").unwrap());
    }

    #[test]
    fn test_longer_entry_does_not_forbid_shorter_candidate() {
        let index = index_of(&["maps.google.com"]);
        assert!(!index.is_forbidden_name("google.com").unwrap());
        assert!(!index.is_forbidden_name("com").unwrap());
        assert!(index.is_forbidden_name("maps.google.com").unwrap());
        assert!(index.is_forbidden_name("static.maps.google.com").unwrap());
    }

    #[test]
    fn test_subsumption_prunes_longer_entries() {
        // "m.ya.ru" is subsumed by "ya.ru" regardless of input order.
        let index = index_of(&["m.ya.ru", "ya.ru"]);
        assert_eq!(index.len(), 1);
        assert!(index.is_forbidden_name("m.ya.ru").unwrap());
        assert!(index.is_forbidden_name("moscow.m.ya.ru").unwrap());
        assert!(index.is_forbidden_name("ya.ru").unwrap());
    }

    #[test]
    fn test_shorter_entry_discards_existing_subtree() {
        // Both orders must converge on "google.com" forbidding everything.
        for names in [
            &["mail.google.com", "google.com"][..],
            &["google.com", "mail.google.com"][..],
        ] {
            let index = index_of(names);
            assert!(index.is_forbidden_name("google.com").unwrap());
            assert!(index.is_forbidden_name("mail.google.com").unwrap());
            assert!(index.is_forbidden_name("docs.google.com").unwrap());
        }
    }

    #[test]
    fn test_duplicate_entries_are_idempotent() {
        let plain = index_of(&["ya.ru", "maps.me"]);
        let duplicated = index_of(&["ya.ru", "maps.me", "ya.ru", "maps.me"]);
        assert_eq!(plain.len(), duplicated.len());

        for candidate in ["ya.ru", "m.ya.ru", "maps.me", "ya.com", "maps.ru"] {
            assert_eq!(
                plain.is_forbidden_name(candidate).unwrap(),
                duplicated.is_forbidden_name(candidate).unwrap(),
                "verdicts differ for {}",
                candidate
            );
        }
    }

    #[test]
    fn test_sibling_entries_share_prefix_nodes() {
        let index = index_of(&["mail.google.com", "docs.google.com"]);
        assert!(index.is_forbidden_name("mail.google.com").unwrap());
        assert!(index.is_forbidden_name("docs.google.com").unwrap());
        assert!(!index.is_forbidden_name("maps.google.com").unwrap());
        assert!(!index.is_forbidden_name("google.com").unwrap());
    }

    #[test]
    fn test_case_sensitive_matching() {
        // No normalization: labels are compared byte-for-byte.
        let index = index_of(&["ya.ru"]);
        assert!(!index.is_forbidden_name("YA.RU").unwrap());
    }

    #[test]
    fn test_malformed_candidate_is_rejected() {
        let index = index_of(&["ya.ru"]);
        assert!(index.is_forbidden_name("ya..ru").is_err());
        assert!(index.is_forbidden_name("").is_err());
    }

    #[test]
    fn test_malformed_forbidden_entry_fails_build() {
        assert!(DomainIndex::from_names(["ya.ru", ".bad"]).is_err());
    }

    #[test]
    fn test_end_to_end_example() {
        let index = index_of(&["ya.ru", "maps.me", "m.ya.ru", "com"]);

        let cases = [
            ("ya.ru", true),
            ("ya.com", false),
            ("m.maps.me", true),
            ("moscow.m.ya.ru", true),
            ("maps.com", true),
        ];
        for (candidate, forbidden) in cases {
            assert_eq!(
                index.is_forbidden_name(candidate).unwrap(),
                forbidden,
                "wrong verdict for {}",
                candidate
            );
        }
    }
}
