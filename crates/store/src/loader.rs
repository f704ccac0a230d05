//! Resilient hydration of remote collections.
//!
//! The public site embeds a seed copy of every collection it renders.
//! One remote read is attempted per render; a non-empty result replaces
//! the seed wholesale (no merge), while a failure or an empty result
//! keeps the seed and logs the reason. Availability over freshness: a
//! briefly unreachable or unseeded backend must never blank the catalog.
//!
//! The policy is a plain function returning a tagged result, so the
//! fallback branch is a visible, testable decision rather than a
//! swallowed error.

use crate::error::StoreError;

/// Where the rendered data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The remote store answered with at least one row.
    Remote,
    /// The embedded seed is being shown.
    Seed,
}

/// A hydrated collection plus the branch that produced it.
#[derive(Debug, Clone)]
pub struct Hydrated<T> {
    pub items: Vec<T>,
    pub source: DataSource,
}

impl<T> Hydrated<T> {
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.source == DataSource::Seed
    }
}

/// Resolve one remote read against the embedded seed.
#[must_use]
pub fn hydrate<T>(
    resource: &str,
    fetched: Result<Vec<T>, StoreError>,
    seed: Vec<T>,
) -> Hydrated<T> {
    match fetched {
        Ok(rows) if !rows.is_empty() => Hydrated {
            items: rows,
            source: DataSource::Remote,
        },
        Ok(_) => {
            tracing::debug!(resource, "remote store has no rows; keeping seed data");
            Hydrated {
                items: seed,
                source: DataSource::Seed,
            }
        }
        Err(error) => {
            tracing::warn!(resource, error = %error, "remote read failed; keeping seed data");
            Hydrated {
                items: seed,
                source: DataSource::Seed,
            }
        }
    }
}

/// Resolve one keyed single-document read against a default. A missing
/// row, a failed request, and a malformed document all keep the default.
pub fn hydrate_single<T>(resource: &str, fetched: Result<Option<T>, StoreError>, default: T) -> T {
    match fetched {
        Ok(Some(document)) => document,
        Ok(None) => {
            tracing::debug!(resource, "settings row not configured; keeping default");
            default
        }
        Err(error) => {
            tracing::warn!(resource, error = %error, "settings read failed; keeping default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_remote_replaces_seed_exactly() {
        let hydrated = hydrate("products", Ok(vec![10, 20, 30]), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(hydrated.items, vec![10, 20, 30]);
        assert_eq!(hydrated.source, DataSource::Remote);
    }

    #[test]
    fn empty_remote_keeps_seed_unchanged() {
        let hydrated = hydrate("products", Ok(Vec::new()), vec![1, 2, 3]);
        assert_eq!(hydrated.items, vec![1, 2, 3]);
        assert!(hydrated.is_seeded());
    }

    #[test]
    fn failed_read_keeps_seed_unchanged() {
        let hydrated = hydrate("products", Err(StoreError::Timeout), vec![1, 2, 3]);
        assert_eq!(hydrated.items, vec![1, 2, 3]);
        assert!(hydrated.is_seeded());
    }

    #[test]
    fn single_document_falls_back_on_missing_row_and_error() {
        assert_eq!(hydrate_single("hero", Ok(Some(9)), 0), 9);
        assert_eq!(hydrate_single("hero", Ok(None), 0), 0);
        assert_eq!(hydrate_single("hero", Err(StoreError::NotFound), 0), 0);
    }
}
