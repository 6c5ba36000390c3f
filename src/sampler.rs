//! Collapsed Gibbs sampling over the topic assignments.

use rand::Rng;

use crate::config::LdaConfig;
use crate::corpus::Corpus;
use crate::error::{LdaError, Result};
use crate::state::SamplerState;

/// Smoothing constants the conditional needs, fixed for a whole run.
///
/// Only built through [`Priors::new`], so K > 0, V > 0 and α, β > 0 hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priors {
    pub(crate) topics: usize,
    pub(crate) alpha: f64,
    pub(crate) beta: f64,
    pub(crate) vocabulary: usize,
}

impl Priors {
    pub fn new(config: &LdaConfig, vocabulary: usize) -> Result<Self> {
        config.validate()?;
        if vocabulary == 0 {
            return Err(LdaError::EmptyVocabulary);
        }
        Ok(Self {
            topics: config.topics,
            alpha: config.alpha,
            beta: config.beta,
            vocabulary,
        })
    }

    pub fn topics(&self) -> usize {
        self.topics
    }

    /// K * alpha
    pub fn alpha_sum(&self) -> f64 {
        self.topics as f64 * self.alpha
    }

    /// V * beta
    pub fn beta_sum(&self) -> f64 {
        self.vocabulary as f64 * self.beta
    }
}

/// Resamples every token once, documents first, positions second.
pub fn sweep<R: Rng + ?Sized>(
    state: &mut SamplerState,
    corpus: &Corpus,
    priors: &Priors,
    rng: &mut R,
) {
    // reused across tokens
    let mut cumulative = vec![0.0f64; priors.topics];
    for (di, doc) in corpus.documents().iter().enumerate() {
        for (pi, &w) in doc.iter().enumerate() {
            resample_token(state, di, pi, w, priors, &mut cumulative, rng);
        }
    }
}

/// Removes token (d, i) from the counts, draws its new topic from the
/// collapsed conditional and puts it back.
///
/// p(k) ∝ (nd[d][k] + α) / (nd_sum[d] + Kα) * (nt[w][k] + β) / (nt_sum[k] + Vβ)
pub fn resample_token<R: Rng + ?Sized>(
    state: &mut SamplerState,
    d: usize,
    i: usize,
    w: usize,
    priors: &Priors,
    cumulative: &mut [f64],
    rng: &mut R,
) -> usize {
    let old_t = state.z[d][i];

    // Decrement old counts
    state.nt[w][old_t] -= 1;
    state.nd[d][old_t] -= 1;
    state.nt_sum[old_t] -= 1;
    state.nd_sum[d] -= 1;

    let doc_den = state.nd_sum[d] as f64 + priors.alpha_sum();
    let vb = priors.beta_sum();
    let mut total = 0.0;
    for (k, c) in cumulative.iter_mut().enumerate() {
        let left = (state.nd[d][k] as f64 + priors.alpha) / doc_den;
        let right = (state.nt[w][k] as f64 + priors.beta) / (state.nt_sum[k] as f64 + vb);
        total += left * right;
        *c = total;
    }

    let new_t = draw(cumulative, rng);

    // Assign and increment counts
    state.z[d][i] = new_t;
    state.nt[w][new_t] += 1;
    state.nd[d][new_t] += 1;
    state.nt_sum[new_t] += 1;
    state.nd_sum[d] += 1;
    new_t
}

/// Smallest k with C(k) > u, u uniform in [0, C(K-1)).
///
/// alpha, beta > 0 keep every score positive, so the last bucket always
/// satisfies the bound. `cumulative` must not be empty.
pub(crate) fn draw<R: Rng + ?Sized>(cumulative: &[f64], rng: &mut R) -> usize {
    let last = cumulative.len() - 1;
    let u = rng.gen::<f64>() * cumulative[last];
    cumulative.iter().position(|&c| c > u).unwrap_or(last)
}
