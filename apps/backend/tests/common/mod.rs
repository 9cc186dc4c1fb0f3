#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

use lovecraft::{GameFlowService, GameServiceConfig, InMemoryGameStore};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    lovecraft_test_support::logging::init();
}

/// Fresh in-memory service with a fixed seed.
pub fn service(seed: u64) -> GameFlowService<InMemoryGameStore> {
    GameFlowService::in_memory(GameServiceConfig::seeded(seed))
}
