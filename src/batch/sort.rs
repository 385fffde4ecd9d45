//! Deterministic batch ordering

use once_cell::sync::Lazy;
use regex::Regex;

use super::REQUIRED_BATCH;

static EXTRA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^EXTRA(\d+)$").expect("EXTRA pattern is a valid regex"));

/// Classification of a batch name, in merge order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum BatchKind {
    /// The mandatory batch
    Regular,
    /// `EXTRA<n>` with its numeric suffix
    Extra(u64),
    /// Anything else (kept, ordered by name after all extras)
    Other,
}

/// Classify a batch name against the given required batch name
pub fn batch_kind(name: &str, required: &str) -> BatchKind {
    if name == required {
        return BatchKind::Regular;
    }
    EXTRA_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|n| n.as_str().parse::<u64>().ok())
        .map(BatchKind::Extra)
        .unwrap_or(BatchKind::Other)
}

/// Order batch names: `REGULAR` first, then `EXTRA<n>` by `n`, then the rest by name.
///
/// Ties (e.g. `EXTRA1` vs `EXTRA01`) fall back to plain string order so the
/// result never depends on input order.
pub fn sort_batches<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    sort_batches_with(names, REQUIRED_BATCH)
}

/// Same as [`sort_batches`] with a custom required batch name
pub fn sort_batches_with<I, S>(names: I, required: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort_by(|a, b| {
        batch_kind(a, required)
            .cmp(&batch_kind(b, required))
            .then_with(|| a.cmp(b))
    });
    names
}
