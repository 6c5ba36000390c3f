//! Orders estimates for reporting. Sorting is stable, so ties keep index order.

use crate::vocabulary::Vocabulary;

/// The highest-probability terms of one topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicTerms {
    pub topic: usize,
    pub terms: Vec<(String, f64)>,
}

/// The most probable topic of one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantTopic {
    pub document: usize,
    pub topic: usize,
    pub probability: f64,
}

/// Indices of `row` by descending value.
fn ranked(row: &[f64]) -> Vec<(usize, f64)> {
    let mut pairs: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
    pairs
}

/// Top `n` terms of every topic by φ[k][w].
///
/// Panics if a φ row is wider than the vocabulary.
pub fn top_terms(phi: &[Vec<f64>], vocabulary: &Vocabulary, n: usize) -> Vec<TopicTerms> {
    phi.iter()
        .enumerate()
        .map(|(topic, row)| {
            let terms = ranked(row)
                .into_iter()
                .take(n)
                .map(|(w, p)| (vocabulary.terms()[w].clone(), p))
                .collect();
            TopicTerms { topic, terms }
        })
        .collect()
}

/// Arg-max of every θ row.
pub fn dominant_topics(theta: &[Vec<f64>]) -> Vec<DominantTopic> {
    theta
        .iter()
        .enumerate()
        .filter_map(|(document, row)| {
            ranked(row).first().map(|&(topic, probability)| DominantTopic {
                document,
                topic,
                probability,
            })
        })
        .collect()
}
