//! Word list loading and normalization

use crate::grid::alphabet;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;
use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// An ordered list of alphabet-only candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load a dictionary with one entry per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dictionary: {}", path.as_ref().display()))?;
        let dictionary = Self::from_text(&content);
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    /// Normalize every line of `text`; lines that cannot be expressed in
    /// the alphabet are dropped.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let words: Vec<String> = lines
            .par_iter()
            .filter_map(|line| {
                let word = normalize(line);
                if word.is_empty() {
                    return None;
                }
                if !word.chars().all(alphabet::contains) {
                    log::debug!("Skipping unsupported entry {:?}", line);
                    return None;
                }
                Some(word)
            })
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for Dictionary {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

/// Fold an entry into crossword letters.
///
/// Accents are dropped (`é` becomes `E`), whitespace and punctuation are
/// removed, letters are upper-cased and `Ø` is spelled `OE`.
pub fn normalize(entry: &str) -> String {
    let folded: String = entry
        .nfd()
        .filter(|&c| !c.is_mark_nonspacing() && !c.is_punctuation() && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();
    folded.nfc().collect::<String>().replace('Ø', "OE")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("rock 'n' roll"), "ROCKNROLL");
        assert_eq!(normalize("  t-shirt\t"), "TSHIRT");
        assert_eq!(normalize("café"), "CAFE");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize("Ångström"), "ANGSTROM");
        assert_eq!(normalize("rock ’n’ roll"), "ROCKNROLL");
        assert_eq!(normalize("t–shirt"), "TSHIRT");
        assert_eq!(normalize("¿qué?"), "QUE");
        assert_eq!(normalize("søren"), "SOEREN");
        assert_eq!(normalize("Øresund"), "OERESUND");
    }

    #[test]
    fn test_from_text_keeps_order_and_duplicates() {
        let dictionary = Dictionary::from_text("cat\n\nDog\ncafé\n a-b \nπ\ncat\n");
        assert_eq!(dictionary.words(), &["CAT", "DOG", "CAFE", "AB", "CAT"]);
        assert_eq!(dictionary.len(), 5);
    }

    #[test]
    fn test_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("words.txt");
        std::fs::write(&path, "abc\nabd\n").unwrap();

        let dictionary = Dictionary::from_file(&path).unwrap();
        assert_eq!(dictionary.into_words(), vec!["ABC".to_string(), "ABD".to_string()]);

        assert!(Dictionary::from_file(temp_dir.path().join("missing.txt")).is_err());
    }
}
