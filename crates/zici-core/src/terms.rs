//! New characters taught in each school term, grades 1 to 6

use std::path::Path;

use crate::error::TextToolError;
use crate::text::read_text;

pub const GRADES: usize = 6;
pub const TERMS_PER_GRADE: usize = 2;

/// Position of a grade/term pair in the term list, if both are in range
pub fn term_index(grade: usize, term: usize) -> Option<usize> {
    if !(1..=GRADES).contains(&grade) || !(1..=TERMS_PER_GRADE).contains(&term) {
        return None;
    }
    Some((grade - 1) * TERMS_PER_GRADE + (term - 1))
}

/// Character lists, one per term, in school order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermChars {
    terms: Vec<Vec<char>>,
}

impl TermChars {
    /// Lists shipped with the crate
    pub fn embedded() -> Self {
        Self::from_text(include_str!("../data/new_chars.txt"))
    }

    /// One term per line; blank lines are skipped
    pub fn from_text(text: &str) -> Self {
        let terms = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty())
            .collect();
        Self { terms }
    }

    pub fn load(path: &Path) -> Result<Self, TextToolError> {
        let terms = Self::from_text(&read_text(path)?);
        tracing::info!("Loaded {} terms from {}", terms.term_count(), path.display());
        Ok(terms)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Characters of `grade` (1-6) and `term` (1-2); empty when out of range
    pub fn get(&self, grade: usize, term: usize) -> &[char] {
        term_index(grade, term)
            .and_then(|index| self.terms.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_index_mapping() {
        let expected = [
            (1, 1, 0),
            (1, 2, 1),
            (2, 1, 2),
            (2, 2, 3),
            (3, 1, 4),
            (3, 2, 5),
            (4, 1, 6),
            (4, 2, 7),
            (5, 1, 8),
            (5, 2, 9),
            (6, 1, 10),
            (6, 2, 11),
        ];
        for (grade, term, index) in expected {
            assert_eq!(term_index(grade, term), Some(index), "grade {grade} term {term}");
        }
    }

    #[test]
    fn test_term_index_out_of_range() {
        assert_eq!(term_index(0, 1), None);
        assert_eq!(term_index(7, 1), None);
        assert_eq!(term_index(1, 0), None);
        assert_eq!(term_index(1, 3), None);
        assert_eq!(term_index(0, 0), None);
    }

    #[test]
    fn test_embedded_has_every_term() {
        let terms = TermChars::embedded();
        assert_eq!(terms.term_count(), GRADES * TERMS_PER_GRADE);

        let sizes: Vec<usize> = (1..=GRADES)
            .flat_map(|grade| (1..=TERMS_PER_GRADE).map(move |term| (grade, term)))
            .map(|(grade, term)| terms.get(grade, term).len())
            .collect();
        assert_eq!(
            sizes,
            vec![102, 200, 250, 250, 250, 250, 250, 250, 220, 180, 180, 120]
        );
    }

    #[test]
    fn test_embedded_term_contents() {
        let terms = TermChars::embedded();
        assert_eq!(&terms.get(1, 1)[..3], &['一', '二', '三']);
        assert_eq!(terms.get(1, 2)[0], '春');
        assert_eq!(terms.get(6, 2)[0], '蒜');
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let terms = TermChars::embedded();
        assert!(terms.get(0, 1).is_empty());
        assert!(terms.get(7, 1).is_empty());
        assert!(terms.get(1, 0).is_empty());
        assert!(terms.get(1, 3).is_empty());
    }

    #[test]
    fn test_short_list_leaves_later_terms_empty() {
        let terms = TermChars::from_text("一二\n\n三 四\r\n");
        assert_eq!(terms.term_count(), 2);
        assert_eq!(terms.get(1, 1), &['一', '二']);
        assert_eq!(terms.get(1, 2), &['三', '四']);
        assert!(terms.get(2, 1).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new_chars.txt");
        std::fs::write(&path, "山水\n日月\n").unwrap();

        let terms = TermChars::load(&path).unwrap();
        assert_eq!(terms.get(1, 2), &['日', '月']);

        let err = TermChars::load(&dir.path().join("none.txt")).unwrap_err();
        assert!(matches!(err, TextToolError::NotFound(_)));
    }
}
