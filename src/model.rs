use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::config::LdaConfig;
use crate::corpus::Corpus;
use crate::error::{LdaError, Result};
use crate::estimate;
use crate::rank::{self, DominantTopic, TopicTerms};
use crate::sampler::{self, Priors};
use crate::state::SamplerState;
use crate::vocabulary::Vocabulary;

/// Everything a presentation layer needs from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct LdaReport {
    pub vocabulary: Vocabulary,
    pub theta: Vec<Vec<f64>>,           // [doc][topic]
    pub phi: Vec<Vec<f64>>,             // [topic][term]
    pub topics: Vec<TopicTerms>,
    pub documents: Vec<DominantTopic>,
}

pub struct Lda {
    config: LdaConfig,
    priors: Priors,

    // corpus and vocabulary
    vocabulary: Vocabulary,
    corpus: Corpus,

    // latent variables & counts
    state: SamplerState,
    sweeps_done: usize,

    // rng
    rng: StdRng,
}

impl Lda {
    /// Build the vocabulary, encode the corpus and draw the initial assignments.
    ///
    /// Fails before any sampling on a bad configuration or when filtering
    /// leaves no terms at all.
    pub fn from_documents<S: AsRef<str>>(
        config: LdaConfig,
        documents: &[Vec<S>],
        stopwords: &HashSet<String>,
    ) -> Result<Self> {
        config.validate()?;

        // 1) build vocabulary
        let (vocabulary, filtered) = Vocabulary::build(documents, stopwords);
        if vocabulary.is_empty() {
            return Err(LdaError::EmptyVocabulary);
        }
        config.validate_top_n(vocabulary.len())?;

        // 2) convert docs to word IDs
        let corpus = Corpus::encode(&filtered, &vocabulary)?;

        let priors = Priors::new(&config, vocabulary.len())?;

        // 3) random initialization of topic assignments
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = SamplerState::initialize(&corpus, config.topics, vocabulary.len(), &mut rng);

        log::info!(
            "LDA model: {} documents, {} terms, {} tokens, K={}",
            corpus.len(),
            vocabulary.len(),
            corpus.token_count(),
            config.topics
        );

        Ok(Self {
            config,
            priors,
            vocabulary,
            corpus,
            state,
            sweeps_done: 0,
            rng,
        })
    }

    /// One full pass over every token.
    pub fn sweep(&mut self) {
        sampler::sweep(&mut self.state, &self.corpus, &self.priors, &mut self.rng);
        self.sweeps_done += 1;
        log::trace!("LDA sweep {} done", self.sweeps_done);
    }

    /// Runs all configured sweeps.
    pub fn train(&mut self) {
        let sweeps = self.config.sweeps;
        for it in 0..sweeps {
            self.sweep();
            if (it + 1) % 50 == 0 {
                log::debug!("Training LDA: sweep {}/{}", it + 1, sweeps);
            }
        }
        log::debug!("Training LDA finished after {} sweeps", self.sweeps_done);
    }

    pub fn theta(&self) -> Vec<Vec<f64>> {
        estimate::theta(&self.state, &self.priors)
    }

    pub fn phi(&self) -> Vec<Vec<f64>> {
        estimate::phi(&self.state, &self.priors)
    }

    /// Return top `n` words for each topic by φ[t][w].
    pub fn top_terms(&self, n: usize) -> Vec<TopicTerms> {
        rank::top_terms(&self.phi(), &self.vocabulary, n)
    }

    pub fn dominant_topics(&self) -> Vec<DominantTopic> {
        rank::dominant_topics(&self.theta())
    }

    /// Estimates and rankings for the current chain state.
    pub fn report(&self) -> LdaReport {
        let theta = self.theta();
        let phi = self.phi();
        LdaReport {
            topics: rank::top_terms(&phi, &self.vocabulary, self.config.top_n),
            documents: rank::dominant_topics(&theta),
            vocabulary: self.vocabulary.clone(),
            theta,
            phi,
        }
    }

    pub fn config(&self) -> &LdaConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn state(&self) -> &SamplerState {
        &self.state
    }

    pub fn sweeps_done(&self) -> usize {
        self.sweeps_done
    }
}

/// Builds, trains and reports in one call.
pub fn fit<S: AsRef<str>>(
    documents: &[Vec<S>],
    stopwords: &HashSet<String>,
    config: LdaConfig,
) -> Result<LdaReport> {
    let mut lda = Lda::from_documents(config, documents, stopwords)?;
    lda.train();
    Ok(lda.report())
}

#[cfg(test)]
mod tests {
    use super::*;
    fn corpus() -> Vec<Vec<&'static str>> {
        vec![
            vec!["apple", "apple", "car"],
            vec!["car", "car", "banana"],
        ]
    }

    #[test]
    fn test_train_runs_every_sweep() {
        let config = LdaConfig::new(2).alpha(1.0).beta(0.1).sweeps(7).seed(1);
        let mut lda = Lda::from_documents(config, &corpus(), &HashSet::new()).unwrap();
        lda.train();
        assert_eq!(lda.sweeps_done(), 7);
        assert!(lda.state().is_consistent(lda.corpus()));
    }

    #[test]
    fn test_rejects_config_before_sampling() {
        let err = Lda::from_documents(LdaConfig::new(0), &corpus(), &HashSet::new()).err();
        assert_eq!(err, Some(LdaError::InvalidTopicCount));

        let config = LdaConfig::new(2).top_n(4);
        let err = Lda::from_documents(config, &corpus(), &HashSet::new()).err();
        assert_eq!(
            err,
            Some(LdaError::TopNExceedsVocabulary {
                top_n: 4,
                vocabulary: 3
            })
        );
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let stop: HashSet<String> = ["apple", "car", "banana"]
            .into_iter()
            .map(String::from)
            .collect();
        let err = Lda::from_documents(LdaConfig::new(2), &corpus(), &stop).err();
        assert_eq!(err, Some(LdaError::EmptyVocabulary));
    }

    #[test]
    fn test_report_uses_configured_top_n() {
        let config = LdaConfig::new(2).alpha(1.0).beta(0.1).sweeps(3).top_n(2).seed(8);
        let report = fit(&corpus(), &HashSet::new(), config).unwrap();
        assert_eq!(report.topics.len(), 2);
        assert!(report.topics.iter().all(|t| t.terms.len() == 2));
        assert_eq!(report.documents.len(), 2);
        for d in &report.documents {
            assert_eq!(d.probability, report.theta[d.document][d.topic]);
        }
    }
}
