//! Type-safe classification of porcelain status codes.
//!
//! Each column of a `git status --porcelain` entry is a single character. This
//! module maps those characters onto the five buckets the segment counts, and
//! names which column belongs to which area.
//!
//! # Public API
//! - [`ChangeKind`]: The bucket a status code falls into
//! - [`Area`]: Index (staging) or working tree, and the column each reads

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Added to the index (A)
    Added,
    /// Modified (M), renamed (R) or copied (C)
    Modified,
    /// Deleted (D)
    Deleted,
    /// Untracked (?)
    Untracked,
    /// Unmerged/conflicted (U)
    Unmerged,
}

impl ChangeKind {
    /// All kinds in display order
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Added,
        ChangeKind::Modified,
        ChangeKind::Deleted,
        ChangeKind::Untracked,
        ChangeKind::Unmerged,
    ];

    /// Classify one status column. Codes outside the five buckets (including
    /// space and `T`) count as nothing.
    pub fn from_code(code: char) -> Option<ChangeKind> {
        match code {
            '?' => Some(ChangeKind::Untracked),
            'D' => Some(ChangeKind::Deleted),
            'A' => Some(ChangeKind::Added),
            'U' => Some(ChangeKind::Unmerged),
            'M' | 'R' | 'C' => Some(ChangeKind::Modified),
            _ => None,
        }
    }

    /// Sign shown in front of the count in a tally
    pub fn sign(&self) -> &'static str {
        match self {
            ChangeKind::Added => "+",
            ChangeKind::Modified => "~",
            ChangeKind::Deleted => "-",
            ChangeKind::Untracked => "?",
            ChangeKind::Unmerged => "x",
        }
    }
}

/// Which side of the two-column status code a tally reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Index, column 0
    Staging,
    /// Working tree, column 1
    Working,
}

impl Area {
    pub fn column(&self) -> usize {
        match self {
            Area::Staging => 0,
            Area::Working => 1,
        }
    }

    /// Classify a porcelain entry for this area. Entries shorter than two
    /// characters never count.
    pub fn classify(&self, line: &str) -> Option<ChangeKind> {
        let mut chars = line.chars();
        let codes = [chars.next()?, chars.next()?];
        ChangeKind::from_code(codes[self.column()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ChangeKind::from_code('?'), Some(ChangeKind::Untracked));
        assert_eq!(ChangeKind::from_code('D'), Some(ChangeKind::Deleted));
        assert_eq!(ChangeKind::from_code('A'), Some(ChangeKind::Added));
        assert_eq!(ChangeKind::from_code('U'), Some(ChangeKind::Unmerged));
        assert_eq!(ChangeKind::from_code('M'), Some(ChangeKind::Modified));
        assert_eq!(ChangeKind::from_code('R'), Some(ChangeKind::Modified));
        assert_eq!(ChangeKind::from_code('C'), Some(ChangeKind::Modified));
    }

    #[test]
    fn test_other_codes_count_as_nothing() {
        for code in [' ', 'T', '!', 'X', 'm', '#'] {
            assert_eq!(ChangeKind::from_code(code), None, "code {code:?}");
        }
    }

    #[test]
    fn test_signs() {
        let signs: Vec<&str> = ChangeKind::ALL.iter().map(|kind| kind.sign()).collect();
        assert_eq!(signs, vec!["+", "~", "-", "?", "x"]);
    }

    #[test]
    fn test_area_reads_its_own_column() {
        assert_eq!(Area::Staging.classify("A  new.rs"), Some(ChangeKind::Added));
        assert_eq!(Area::Working.classify("A  new.rs"), None);
        assert_eq!(Area::Staging.classify(" D gone.rs"), None);
        assert_eq!(Area::Working.classify(" D gone.rs"), Some(ChangeKind::Deleted));
        assert_eq!(Area::Staging.classify("RM a -> b"), Some(ChangeKind::Modified));
        assert_eq!(Area::Working.classify("RM a -> b"), Some(ChangeKind::Modified));
    }

    #[test]
    fn test_short_lines_never_count() {
        for area in [Area::Staging, Area::Working] {
            assert_eq!(area.classify(""), None);
            assert_eq!(area.classify("M"), None);
        }
    }

    #[test]
    fn test_area_columns() {
        assert_eq!(Area::Staging.column(), 0);
        assert_eq!(Area::Working.column(), 1);
        // Only the first two characters are codes; the path never counts
        assert_eq!(Area::Working.classify("M  Docs/README"), None);
        assert_eq!(Area::Working.classify(" MD"), Some(ChangeKind::Modified));
    }
}
