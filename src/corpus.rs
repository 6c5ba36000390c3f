use crate::error::{LdaError, Result};
use crate::vocabulary::{Vocabulary, WordId};

/// Documents encoded as vocabulary ids, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    docs: Vec<Vec<WordId>>,
}

impl Corpus {
    /// Pure lookup of every filtered token; output lengths equal input lengths.
    pub fn encode(filtered: &[Vec<String>], vocabulary: &Vocabulary) -> Result<Self> {
        let docs = filtered
            .iter()
            .map(|doc| {
                doc.iter()
                    .map(|term| {
                        vocabulary
                            .id(term)
                            .ok_or_else(|| LdaError::UnknownTerm(term.clone()))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { docs })
    }

    pub fn documents(&self) -> &[Vec<WordId>] {
        &self.docs
    }

    pub fn document(&self, d: usize) -> &[WordId] {
        &self.docs[d]
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Total number of token occurrences.
    pub fn token_count(&self) -> usize {
        self.docs.iter().map(Vec::len).sum()
    }
}
