//! Topic assignments and the four count tables the sampler keeps in sync.

use rand::Rng;

use crate::corpus::Corpus;

/// Latent variables of the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerState {
    pub z: Vec<Vec<usize>>,       // [doc][position]: topic of each token
    pub nt: Vec<Vec<usize>>,      // [term][topic]: occurrences of term assigned to topic
    pub nd: Vec<Vec<usize>>,      // [doc][topic]: tokens of doc assigned to topic
    pub nt_sum: Vec<usize>,       // [topic]: tokens assigned to topic
    pub nd_sum: Vec<usize>,       // [doc]: document length
}

impl SamplerState {
    /// Assigns every token a uniformly drawn topic and derives the counts.
    pub fn initialize<R: Rng + ?Sized>(
        corpus: &Corpus,
        topics: usize,
        vocabulary: usize,
        rng: &mut R,
    ) -> Self {
        let d = corpus.len();
        let mut z = Vec::with_capacity(d);
        let mut nt = vec![vec![0usize; topics]; vocabulary];
        let mut nd = vec![vec![0usize; topics]; d];
        let mut nt_sum = vec![0usize; topics];
        let mut nd_sum = vec![0usize; d];

        for (di, doc) in corpus.documents().iter().enumerate() {
            nd_sum[di] = doc.len();
            let mut assignments = Vec::with_capacity(doc.len());
            for &w in doc {
                let topic = rng.gen_range(0..topics);
                assignments.push(topic);
                nt[w][topic] += 1;
                nd[di][topic] += 1;
                nt_sum[topic] += 1;
            }
            z.push(assignments);
        }

        Self {
            z,
            nt,
            nd,
            nt_sum,
            nd_sum,
        }
    }

    pub fn topics(&self) -> usize {
        self.nt_sum.len()
    }

    /// True when every count table agrees with `z` and the corpus.
    pub fn is_consistent(&self, corpus: &Corpus) -> bool {
        let k = self.topics();
        if self.z.len() != corpus.len() || self.nd_sum.len() != corpus.len() {
            return false;
        }

        let mut nt = vec![vec![0usize; k]; self.nt.len()];
        let mut nd = vec![vec![0usize; k]; corpus.len()];
        for (di, doc) in corpus.documents().iter().enumerate() {
            if self.z[di].len() != doc.len() || self.nd_sum[di] != doc.len() {
                return false;
            }
            for (&w, &topic) in doc.iter().zip(&self.z[di]) {
                if topic >= k || w >= nt.len() {
                    return false;
                }
                nt[w][topic] += 1;
                nd[di][topic] += 1;
            }
            if nd[di].iter().sum::<usize>() != self.nd_sum[di] {
                return false;
            }
        }

        let column_sums_match =
            (0..k).all(|t| nt.iter().map(|row| row[t]).sum::<usize>() == self.nt_sum[t]);
        nt == self.nt && nd == self.nd && column_sums_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn corpus(raw: &[&[&str]]) -> (Corpus, usize) {
        let docs: Vec<Vec<&str>> = raw.iter().map(|d| d.to_vec()).collect();
        let (vocab, filtered) = Vocabulary::build(&docs, &HashSet::new());
        (Corpus::encode(&filtered, &vocab).unwrap(), vocab.len())
    }

    #[test]
    fn test_initialize_populates_counts() {
        let (corpus, v) = corpus(&[&["apple", "apple", "car"], &["car", "car", "banana"]]);
        let mut rng = StdRng::seed_from_u64(7);
        let state = SamplerState::initialize(&corpus, 2, v, &mut rng);

        assert_eq!(state.nd_sum, vec![3, 3]);
        assert_eq!(state.nt_sum.iter().sum::<usize>(), 6);
        assert!(state.z.iter().flatten().all(|&t| t < 2));
        assert!(state.is_consistent(&corpus));
    }

    #[test]
    fn test_empty_document_has_zero_counts() {
        let (corpus, v) = corpus(&[&["apple", "car"], &[]]);
        let mut rng = StdRng::seed_from_u64(1);
        let state = SamplerState::initialize(&corpus, 3, v, &mut rng);
        assert_eq!(state.nd_sum[1], 0);
        assert_eq!(state.nd[1], vec![0, 0, 0]);
        assert!(state.z[1].is_empty());
        assert!(state.is_consistent(&corpus));
    }

    #[test]
    fn test_detects_drift() {
        let (corpus, v) = corpus(&[&["apple", "car"]]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SamplerState::initialize(&corpus, 2, v, &mut rng);
        state.nt_sum[0] += 1;
        assert!(!state.is_consistent(&corpus));
    }
}
