//! Latent Dirichlet Allocation estimated with collapsed Gibbs sampling.
//!
//! Pipeline: [`Vocabulary`] → [`Corpus`] → [`SamplerState`] → [`sampler::sweep`]
//! → [`estimate::theta`] / [`estimate::phi`] → [`rank`].

extern crate log;

pub mod config;
pub mod corpus;
pub mod error;
pub mod estimate;
pub mod model;
pub mod rank;
pub mod sampler;
pub mod state;
pub mod text;
pub mod vocabulary;

pub use config::LdaConfig;
pub use corpus::Corpus;
pub use error::{LdaError, Result};
pub use model::{fit, Lda, LdaReport};
pub use rank::{DominantTopic, TopicTerms};
pub use sampler::Priors;
pub use state::SamplerState;
pub use vocabulary::{Vocabulary, WordId};

/// Model over raw text with the default tokenizer and stopwords, K = 3, seed 42.
pub fn default(docs_raw: &[&str]) -> Result<Lda> {
    let docs: Vec<Vec<String>> = docs_raw.iter().map(|d| text::tokenize(d)).collect();
    let config = LdaConfig::new(3).alpha(0.1).beta(0.01).seed(42);
    Lda::from_documents(config, &docs, &text::default_stopwords())
}
