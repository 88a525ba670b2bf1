//! Shared report text helpers.

use std::fmt;

/// Write up to `limit` items separated by `", "` (0 = no limit), then a
/// `... (N more)` marker for whatever was left out of `total`.
pub(crate) fn write_limited<I>(
    f: &mut fmt::Formatter<'_>,
    items: I,
    total: u64,
    limit: usize,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let shown = if limit == 0 {
        total
    } else {
        total.min(limit as u64)
    };

    let take = usize::try_from(shown).unwrap_or(usize::MAX);
    let mut written = 0u64;
    for (idx, item) in items.into_iter().take(take).enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
        written += 1;
    }

    if total > written {
        write!(f, ", ... ({} more)", total - written)?;
    }
    Ok(())
}
