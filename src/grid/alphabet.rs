//! The fixed, ordered set of letters a crossword cell may hold

const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the letter at the given index, if any.
pub fn letter_at(index: usize) -> Option<char> {
    LETTERS.get(index).copied()
}

/// Returns the index of the given letter in the alphabet.
pub fn index_of(letter: char) -> Option<usize> {
    LETTERS.binary_search(&letter).ok()
}

/// Whether the given letter belongs to the alphabet.
pub fn contains(letter: char) -> bool {
    index_of(letter).is_some()
}

/// Number of letters.
pub const fn size() -> usize {
    LETTERS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_at() {
        assert_eq!(letter_at(0), Some('A'));
        assert_eq!(letter_at(25), Some('Z'));
        assert_eq!(letter_at(26), None);
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('M'), Some(12));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('a'), None);
        assert_eq!(index_of('#'), None);
    }

    #[test]
    fn test_contains() {
        assert!(contains('Q'));
        assert!(!contains('.'));
        assert!(!contains('É'));
    }

    #[test]
    fn test_size() {
        assert_eq!(size(), 26);
    }
}
