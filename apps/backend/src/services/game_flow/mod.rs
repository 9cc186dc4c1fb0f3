//! Game flow service: the asynchronous facade over the pure reducers.
//!
//! Every mutating call becomes one [`crate::domain::Action`] applied through
//! the [`GameStore`], so reducers stay pure and the store alone decides
//! persistence and fan-out.

mod admin;
mod lobby;
mod mutation;
mod queries;
mod round_lifecycle;

use std::sync::atomic::AtomicU64;

use rand::Rng;

use crate::config::GameServiceConfig;
use crate::store::{GameStore, InMemoryGameStore};

pub use mutation::GameMutationResult;

pub struct GameFlowService<S: GameStore> {
    store: S,
    base_seed: u64,
    /// Number of commands handed to the store so far.
    sequence: AtomicU64,
}

impl<S: GameStore> GameFlowService<S> {
    pub fn new(store: S, config: GameServiceConfig) -> Self {
        let base_seed = config.rng_seed.unwrap_or_else(|| rand::rng().random());
        Self {
            store,
            base_seed,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}

impl GameFlowService<InMemoryGameStore> {
    /// Service over a fresh process-local store.
    pub fn in_memory(config: GameServiceConfig) -> Self {
        let store = InMemoryGameStore::with_buffer(config.subscription_buffer);
        Self::new(store, config)
    }
}
