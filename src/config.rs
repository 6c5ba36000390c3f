//! Run configuration shared by every stage of the pipeline.

use crate::error::{LdaError, Result};

/// Hyper-parameters and reporting knobs for one LDA run.
#[derive(Debug, Clone, PartialEq)]
pub struct LdaConfig {
    pub topics: usize,     // K
    pub alpha: f64,        // Dirichlet prior for document-topic distributions
    pub beta: f64,         // Dirichlet prior for topic-word distributions
    pub sweeps: usize,     // full Gibbs passes over the corpus
    pub top_n: usize,      // terms reported per topic
    pub seed: Option<u64>, // None draws the seed from OS entropy
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self::new(20)
    }
}

impl LdaConfig {
    /// Configuration for `topics` topics with alpha = 50 / K and beta = 0.01.
    pub fn new(topics: usize) -> Self {
        let alpha = if topics == 0 { 0.0 } else { 50.0 / topics as f64 };
        Self {
            topics,
            alpha,
            beta: 0.01,
            sweeps: 50,
            top_n: 3,
            seed: None,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks everything that can be checked without a vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.topics == 0 {
            return Err(LdaError::InvalidTopicCount);
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(LdaError::InvalidParameter(format!(
                "alpha must be a positive finite number, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(LdaError::InvalidParameter(format!(
                "beta must be a positive finite number, got {}",
                self.beta
            )));
        }
        if self.sweeps == 0 {
            return Err(LdaError::InvalidSweepCount);
        }
        if self.top_n == 0 {
            return Err(LdaError::InvalidTopN);
        }
        Ok(())
    }

    /// top-N can only be checked once the vocabulary is known.
    pub fn validate_top_n(&self, vocabulary: usize) -> Result<()> {
        if self.top_n > vocabulary {
            return Err(LdaError::TopNExceedsVocabulary {
                top_n: self.top_n,
                vocabulary,
            });
        }
        Ok(())
    }
}
