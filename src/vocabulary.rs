//! Term to id mapping built from the filtered corpus.

use std::collections::{HashMap, HashSet};

pub type WordId = usize;

/// Ids are dense: exactly `0..len()`, assigned at first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, WordId>,
}

impl Vocabulary {
    /// Filters every document and assigns ids in corpus order.
    ///
    /// A token is kept when its trimmed form is not a stopword and is longer
    /// than one character. Returns the vocabulary together with the filtered
    /// token sequence of each document.
    pub fn build<S: AsRef<str>>(
        documents: &[Vec<S>],
        stopwords: &HashSet<String>,
    ) -> (Self, Vec<Vec<String>>) {
        let mut vocabulary = Self::default();
        let filtered: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| {
                doc.iter()
                    .map(|tok| tok.as_ref().trim())
                    .filter(|tok| tok.chars().count() > 1 && !stopwords.contains(*tok))
                    .map(|tok| {
                        vocabulary.insert(tok);
                        tok.to_string()
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        (vocabulary, filtered)
    }

    fn insert(&mut self, term: &str) -> WordId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len();
        self.terms.push(term.to_string());
        self.ids.insert(term.to_string(), id);
        id
    }

    pub fn id(&self, term: &str) -> Option<WordId> {
        self.ids.get(term).copied()
    }

    pub fn term(&self, id: WordId) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    /// Terms indexed by id.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// (term, id) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WordId)> {
        self.terms.iter().enumerate().map(|(id, t)| (t.as_str(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_ids_follow_first_occurrence() {
        let corpus = docs(&[&["apple", "apple", "car"], &["car", "car", "banana"]]);
        let (vocab, filtered) = Vocabulary::build(&corpus, &HashSet::new());
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("apple"), Some(0));
        assert_eq!(vocab.id("car"), Some(1));
        assert_eq!(vocab.id("banana"), Some(2));
        assert_eq!(vocab.term(2), Some("banana"));
        assert_eq!(filtered, corpus);
    }

    #[test]
    fn test_filters_stopwords_and_single_chars() {
        let stop: HashSet<String> = ["the".to_string()].into_iter().collect();
        let corpus = docs(&[&["the", "a", " x ", "ox", " river "], &["é", "école"]]);
        let (vocab, filtered) = Vocabulary::build(&corpus, &stop);
        assert_eq!(filtered, docs(&[&["ox", "river"], &["école"]]));
        assert_eq!(vocab.terms(), &["ox", "river", "école"]);
    }

    #[test]
    fn test_ids_are_contiguous() {
        let corpus = docs(&[&["delta", "alpha"], &[], &["gamma", "alpha", "beta"]]);
        let (vocab, _) = Vocabulary::build(&corpus, &HashSet::new());
        let mut ids: Vec<WordId> = vocab.iter().map(|(_, id)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..vocab.len()).collect::<Vec<_>>());
        for (term, id) in vocab.iter() {
            assert_eq!(vocab.id(term), Some(id));
        }
    }

    #[test]
    fn test_everything_filtered_gives_empty_vocabulary() {
        let stop: HashSet<String> = ["of".to_string()].into_iter().collect();
        let corpus = docs(&[&["of", "a"], &["b"]]);
        let (vocab, filtered) = Vocabulary::build(&corpus, &stop);
        assert!(vocab.is_empty());
        assert!(filtered.iter().all(Vec::is_empty));
    }
}
