//! Include deduplication.

use indexmap::IndexSet;
use thiserror::Error;
use tracing::debug;

/// Number of slots the tracker grows by when it runs out of room.
const GROWTH_STEP: usize = 16;

/// The include set could not grow.
///
/// Header correctness cannot be guaranteed past this point, so callers
/// treat it as fatal to the whole generation run.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("cannot record include '{header}': include set exhausted at {len} entries")]
    Exhausted {
        header: String,
        len: usize,
        #[source]
        source: indexmap::TryReserveError,
    },

    #[error("cannot record include '{header}': limit of {limit} includes reached")]
    LimitReached { header: String, limit: usize },
}

/// Tracks header names already emitted for the class being generated.
///
/// Maintains first-seen order for deterministic output. A tracker belongs
/// to a single class pass; [`IncludeTracker::reset`] starts a new one.
///
/// # Example
///
/// ```
/// use adtgen_codegen::IncludeTracker;
///
/// let mut includes = IncludeTracker::new();
/// assert!(includes.require_once("list.h").unwrap());
/// assert!(includes.require_once("ixml.h").unwrap());
/// assert!(!includes.require_once("list.h").unwrap());
///
/// assert_eq!(includes.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IncludeTracker {
    seen: IndexSet<String>,
    limit: Option<usize>,
}

impl IncludeTracker {
    /// Create a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that refuses to record more than `limit` distinct headers.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            seen: IndexSet::new(),
            limit: Some(limit),
        }
    }

    /// Forget every recorded header (start of a class pass). The limit stays.
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    /// Record `header`, returning true only the first time it is requested.
    pub fn require_once(&mut self, header: &str) -> Result<bool, TrackerError> {
        if self.seen.contains(header) {
            debug!(header, "include already emitted");
            return Ok(false);
        }

        if let Some(limit) = self.limit.filter(|&limit| self.seen.len() >= limit) {
            return Err(TrackerError::LimitReached {
                header: header.to_string(),
                limit,
            });
        }

        if self.seen.len() == self.seen.capacity() {
            self.seen
                .try_reserve(GROWTH_STEP)
                .map_err(|source| TrackerError::Exhausted {
                    header: header.to_string(),
                    len: self.seen.len(),
                    source,
                })?;
        }
        self.seen.insert(header.to_string());
        debug!(header, "include recorded");

        Ok(true)
    }

    /// Check if the tracker is empty.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Get the number of recorded headers.
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_once() {
        let mut includes = IncludeTracker::new();
        assert!(includes.require_once("UpnpString.h").unwrap());
        assert!(!includes.require_once("UpnpString.h").unwrap());
        assert!(includes.require_once("<time.h>").unwrap());
        assert_eq!(includes.len(), 2);
    }

    #[test]
    fn test_reset_starts_a_new_pass() {
        let mut includes = IncludeTracker::new();
        includes.require_once("ixml.h").unwrap();
        includes.reset();

        assert!(includes.is_empty());
        assert!(includes.require_once("ixml.h").unwrap());
    }

    #[test]
    fn test_grows_past_one_step() {
        let mut includes = IncludeTracker::new();
        for i in 0..(GROWTH_STEP * 3 + 1) {
            assert!(includes.require_once(&format!("h{}.h", i)).unwrap());
        }
        assert_eq!(includes.len(), GROWTH_STEP * 3 + 1);
        assert!(!includes.require_once("h0.h").unwrap());
    }

    #[test]
    fn test_limit_rejects_new_headers_only() {
        let mut includes = IncludeTracker::with_limit(2);
        assert!(includes.require_once("a.h").unwrap());
        assert!(includes.require_once("b.h").unwrap());
        assert!(!includes.require_once("a.h").unwrap());

        let err = includes.require_once("c.h").unwrap_err();
        assert!(matches!(err, TrackerError::LimitReached { limit: 2, .. }));
        assert_eq!(
            err.to_string(),
            "cannot record include 'c.h': limit of 2 includes reached"
        );

        includes.reset();
        assert!(includes.require_once("c.h").unwrap());
        assert!(includes.require_once("d.h").unwrap());
        assert!(includes.require_once("e.h").is_err());
    }
}
