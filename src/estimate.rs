//! Posterior point estimates read off the current counts.

use crate::sampler::Priors;
use crate::state::SamplerState;

/// θ[d][k] = (nd[d][k] + α) / (nd_sum[d] + Kα)
pub fn theta(state: &SamplerState, priors: &Priors) -> Vec<Vec<f64>> {
    let ka = priors.alpha_sum();
    state
        .nd
        .iter()
        .zip(&state.nd_sum)
        .map(|(row, &len)| {
            let denom = len as f64 + ka;
            row.iter()
                .map(|&count| (count as f64 + priors.alpha) / denom)
                .collect()
        })
        .collect()
}

/// φ[k][w] = (nt[w][k] + β) / (nt_sum[k] + Vβ)
pub fn phi(state: &SamplerState, priors: &Priors) -> Vec<Vec<f64>> {
    let vb = priors.beta_sum();
    let mut phi = vec![vec![0.0f64; priors.vocabulary]; priors.topics];
    for (t, row) in phi.iter_mut().enumerate() {
        let denom = state.nt_sum[t] as f64 + vb;
        for (w, p) in row.iter_mut().enumerate() {
            *p = (state.nt[w][t] as f64 + priors.beta) / denom;
        }
    }
    phi
}
