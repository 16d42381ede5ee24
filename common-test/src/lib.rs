//! Reproducible randomness for tests.
//!
//! Every scope draws its seed once, from the environment variable named after the
//! scope when it parses as a `u64`, randomly otherwise. The seed is printed so a
//! failing run can be replayed with `<SCOPE>=<seed> cargo test`.

use std::{
    collections::HashMap,
    env,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};
use thiserror::Error;

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed registry lock is poisoned")]
    Poisoned,
}

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(Default::default)
}

fn read_seed_var(scope: &str) -> Option<u64> {
    env::var(scope).ok()?.parse().ok()
}

fn seed_for(scope: &'static str) -> Result<u64, SeedError> {
    if let Some(&seed) = seeds().read().map_err(|_| SeedError::Poisoned)?.get(scope) {
        return Ok(seed);
    }

    let mut seeds = seeds().write().map_err(|_| SeedError::Poisoned)?;
    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = read_seed_var(scope).unwrap_or_else(random);
        println!("Using seed {seed} for {scope}");
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, SeedError> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, SeedError> {
    seed_for(scope).map(StdRng::seed_from_u64)
}
