//! Hamming noise: independent bit flips over an existing election.

use mav_election::Election;
use rand::Rng;

use crate::error::Result;
use crate::{check_probability, rng_from};

/// Returns a fresh election where every approval entry of `elec` has
/// been flipped independently with probability `noise_prob`.
///
/// The input election is untouched; wrap any base culture's output to
/// model noisy ballots.
pub fn add_hamming_noise(elec: &Election, noise_prob: f64, seed: Option<u64>) -> Result<Election> {
    check_probability("noise_prob", noise_prob)?;
    let mut rng = rng_from(seed);
    let noisy = Election::from_fn(
        elec.n_voters(),
        elec.candidates_per_issue().to_vec(),
        |v, i, c| elec.approves(v, i, c) != rng.gen_bool(noise_prob),
    )?;
    Ok(noisy)
}
