//! Change-feed assembly over a note's revision sequence.

use serde::Serialize;

use crate::diff::{diff, DiffMode};
use crate::types::{DbId, Timestamp};

/// Read access to a stored content snapshot.
pub trait Snapshot {
    fn id(&self) -> DbId;
    fn created_at(&self) -> Timestamp;
    fn content(&self) -> &str;
}

/// One entry of a note's change feed.
///
/// `revision_id` and `created_at` belong to the newer revision of the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub revision_id: DbId,
    pub created_at: Timestamp,
    pub diff: String,
}

/// Pair adjacent revisions and diff each older snapshot against its successor.
///
/// `revisions` must be ordered newest first. The result has
/// `revisions.len() - 1` entries, or none for zero or one revision.
pub fn assemble_history<S: Snapshot>(revisions: &[S], mode: DiffMode) -> Vec<HistoryEntry> {
    revisions
        .windows(2)
        .map(|pair| {
            let (newer, older) = (&pair[0], &pair[1]);
            HistoryEntry {
                revision_id: newer.id(),
                created_at: newer.created_at(),
                diff: diff(older.content(), newer.content(), mode),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    struct Rev {
        id: DbId,
        at: Timestamp,
        content: &'static str,
    }

    impl Snapshot for Rev {
        fn id(&self) -> DbId {
            self.id
        }
        fn created_at(&self) -> Timestamp {
            self.at
        }
        fn content(&self) -> &str {
            self.content
        }
    }

    fn rev(id: DbId, minutes: i64, content: &'static str) -> Rev {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        Rev {
            id,
            at: base + Duration::minutes(minutes),
            content,
        }
    }

    #[test]
    fn no_revisions_yield_empty_history() {
        let revisions: Vec<Rev> = Vec::new();
        assert!(assemble_history(&revisions, DiffMode::Aligned).is_empty());
    }

    #[test]
    fn single_revision_yields_empty_history() {
        let revisions = vec![rev(1, 0, "a")];
        assert!(assemble_history(&revisions, DiffMode::Aligned).is_empty());
    }

    #[test]
    fn two_revisions_compare_older_to_newer() {
        let revisions = vec![rev(2, 5, "a\nb"), rev(1, 0, "a")];
        let history = assemble_history(&revisions, DiffMode::Aligned);

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].revision_id, 2);
        assert_eq!(history[0].created_at, revisions[0].at);
        assert_eq!(history[0].diff, "+ b");
    }

    #[test]
    fn length_is_revision_count_minus_one() {
        let revisions = vec![
            rev(4, 15, "d"),
            rev(3, 10, "c"),
            rev(2, 5, "b"),
            rev(1, 0, "a"),
        ];
        let history = assemble_history(&revisions, DiffMode::Aligned);

        assert_eq!(history.len(), 3);
        let ids: Vec<_> = history.iter().map(|h| h.revision_id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
        assert_eq!(history[2].diff, "+ b\n- a");
    }

    #[test]
    fn unchanged_resave_has_empty_diff() {
        let revisions = vec![rev(2, 5, "same"), rev(1, 0, "same")];
        let history = assemble_history(&revisions, DiffMode::Aligned);
        assert_eq!(history[0].diff, "");
    }

    #[test]
    fn mode_is_forwarded_to_the_diff_engine() {
        let revisions = vec![rev(2, 5, "a\nnew\nb"), rev(1, 0, "a\nb")];
        let lcs = assemble_history(&revisions, DiffMode::Lcs);
        let aligned = assemble_history(&revisions, DiffMode::Aligned);
        assert_eq!(lcs[0].diff, "+ new");
        assert_eq!(aligned[0].diff, "+ new\n+ b\n- b");
    }
}
