//! Line-oriented check protocol.
//!
//! Input carries two blocks, each a count line followed by that many domain
//! lines: first the forbidden set, then the candidates. Output is one
//! verdict token per candidate, in input order.

use std::io::{BufRead, Write};

use log::debug;

use crate::domain::Domain;
use crate::error::{DomainGuardError, Result};
use crate::index::DomainIndex;

/// Verdict printed for a forbidden candidate.
pub const VERDICT_FORBIDDEN: &str = "Bad";
/// Verdict printed for an allowed candidate.
pub const VERDICT_ALLOWED: &str = "Good";

/// Read a single line holding a non-negative count.
pub fn read_count(input: &mut impl BufRead) -> Result<usize> {
    let line = read_line(input)?;
    line.trim()
        .parse::<usize>()
        .map_err(|_| DomainGuardError::Protocol(format!("Invalid domain count: '{}'", line.trim())))
}

/// Read exactly `count` domain lines.
pub fn read_domains(input: &mut impl BufRead, count: usize) -> Result<Vec<Domain>> {
    let mut domains = Vec::with_capacity(count);
    for _ in 0..count {
        let line = read_line(input)?;
        domains.push(Domain::parse(line.trim_end_matches(['\r', '\n']))?);
    }
    Ok(domains)
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(DomainGuardError::Protocol(
            "Unexpected end of input".to_string(),
        ));
    }
    Ok(line)
}

/// Run the full check protocol: build the index from the first block,
/// verdict every candidate in the second.
pub fn run(mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let forbidden_count = read_count(&mut input)?;
    let forbidden = read_domains(&mut input, forbidden_count)?;
    let index = DomainIndex::new(forbidden);

    let candidate_count = read_count(&mut input)?;
    let candidates = read_domains(&mut input, candidate_count)?;
    debug!(
        "checking {} candidates against {} forbidden entries",
        candidates.len(),
        index.len()
    );

    for candidate in &candidates {
        let verdict = if index.is_forbidden(candidate) {
            VERDICT_FORBIDDEN
        } else {
            VERDICT_ALLOWED
        };
        writeln!(output, "{}", verdict)?;
    }
    Ok(())
}
