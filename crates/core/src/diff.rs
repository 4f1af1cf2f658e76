//! Line-level diffs between two note snapshots.
//!
//! The default [`DiffMode::Aligned`] compares lines by position only: line
//! `i` of the old text against line `i` of the new text. Inserting a line
//! therefore reports every following line as both removed and added. Callers
//! must not read the output as a minimal edit script. [`DiffMode::Lcs`] is a
//! content-aligned alternative based on the longest common subsequence.

use serde::{Deserialize, Serialize};

/// Prefix for a line present only in the newer snapshot.
pub const ADDED_PREFIX: &str = "+ ";
/// Prefix for a line present only in the older snapshot.
pub const REMOVED_PREFIX: &str = "- ";

/// Which diff algorithm to use when rendering history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    #[default]
    Aligned,
    Lcs,
}

/// Render the change summary from `old` to `new` using `mode`.
pub fn diff(old: &str, new: &str, mode: DiffMode) -> String {
    match mode {
        DiffMode::Aligned => aligned_diff(old, new),
        DiffMode::Lcs => lcs_diff(old, new),
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    // Unlike `str::lines`, keeps a trailing empty segment and maps "" to [""].
    text.split('\n').collect()
}

/// Index-aligned diff: all `"+ "` lines first, then all `"- "` lines.
pub fn aligned_diff(old: &str, new: &str) -> String {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let mut out = Vec::new();

    for (i, line) in new_lines.iter().enumerate() {
        if old_lines.get(i) != Some(line) {
            out.push(format!("{ADDED_PREFIX}{line}"));
        }
    }

    for (i, line) in old_lines.iter().enumerate() {
        if new_lines.get(i) != Some(line) {
            out.push(format!("{REMOVED_PREFIX}{line}"));
        }
    }

    out.join("\n")
}

// ---------------------------------------------------------------------------
// Content-aligned (LCS) diff
// ---------------------------------------------------------------------------

/// Largest LCS table (changed old lines x changed new lines) the content
/// diff will build. Past this, [`lcs_diff`] returns the aligned diff.
pub const MAX_LCS_CELLS: usize = 4_000_000;

enum Edit<'a> {
    Keep,
    Insert(&'a str),
    Delete(&'a str),
}

/// Content-aligned diff in document order: at each change point removed
/// lines come before added ones. Unchanged lines are omitted.
///
/// Shared leading and trailing lines are stripped first. If the remaining
/// region exceeds [`MAX_LCS_CELLS`], the aligned diff is returned instead.
pub fn lcs_diff(old: &str, new: &str) -> String {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    let prefix = old_lines
        .iter()
        .zip(&new_lines)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old_lines[prefix..]
        .iter()
        .rev()
        .zip(new_lines[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let removed = &old_lines[prefix..old_lines.len() - suffix];
    let added = &new_lines[prefix..new_lines.len() - suffix];

    if removed.len().saturating_mul(added.len()) > MAX_LCS_CELLS {
        return aligned_diff(old, new);
    }

    render(&edit_script(removed, added))
}

/// Walk a suffix-LCS table from the top-left corner, emitting edits in order.
fn edit_script<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Edit<'a>> {
    let width = new.len() + 1;
    // table[i * width + j] = LCS length of old[i..] and new[j..]
    let mut table = vec![0u32; (old.len() + 1) * width];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            table[i * width + j] = if old[i] == new[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut edits = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            edits.push(Edit::Keep);
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            edits.push(Edit::Delete(old[i]));
            i += 1;
        } else {
            edits.push(Edit::Insert(new[j]));
            j += 1;
        }
    }
    edits.extend(old[i..].iter().map(|&line| Edit::Delete(line)));
    edits.extend(new[j..].iter().map(|&line| Edit::Insert(line)));
    edits
}

fn render(edits: &[Edit<'_>]) -> String {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Insert(line) => Some(format!("{ADDED_PREFIX}{line}")),
            Edit::Delete(line) => Some(format!("{REMOVED_PREFIX}{line}")),
            Edit::Keep => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
