//! Nesting depth of an archive entry.

/// Separator used for depth counting, regardless of the host platform.
pub const DIR_SEP: char = '/';

/// Compute the depth of `entry_name` inside the archive at `container_path`.
///
/// The archive itself counts as one level and every `/` in either path adds
/// one more. The count is purely syntactic: leading or trailing separators
/// are not normalized, so `a/` and `a` differ by one.
pub fn entry_depth(container_path: &str, entry_name: &str) -> usize {
    1 + separators(container_path) + separators(entry_name)
}

fn separators(path: &str) -> usize {
    path.matches(DIR_SEP).count()
}
