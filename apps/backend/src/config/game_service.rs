use std::env;
use std::str::FromStr;

use crate::error::AppError;
use crate::store::in_memory::DEFAULT_SUBSCRIPTION_BUFFER;

const RNG_SEED_VAR: &str = "LOVECRAFT_RNG_SEED";
const SUBSCRIPTION_BUFFER_VAR: &str = "LOVECRAFT_SUBSCRIPTION_BUFFER";

/// Settings for a [`crate::GameFlowService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameServiceConfig {
    /// Base seed for every shuffle and deal. `None` draws one from the OS.
    pub rng_seed: Option<u64>,
    /// Capacity of each subscription channel.
    pub subscription_buffer: usize,
}

impl Default for GameServiceConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            subscription_buffer: DEFAULT_SUBSCRIPTION_BUFFER,
        }
    }
}

impl GameServiceConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load from `LOVECRAFT_RNG_SEED` and `LOVECRAFT_SUBSCRIPTION_BUFFER`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rng_seed = parse_var(&lookup, RNG_SEED_VAR)?;
        let subscription_buffer =
            parse_var(&lookup, SUBSCRIPTION_BUFFER_VAR)?.unwrap_or(DEFAULT_SUBSCRIPTION_BUFFER);

        if subscription_buffer == 0 {
            return Err(AppError::config(format!(
                "{SUBSCRIPTION_BUFFER_VAR} must be at least 1"
            )));
        }

        Ok(Self {
            rng_seed,
            subscription_buffer,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e| {
            AppError::config(format!("Invalid value '{raw}' for '{name}': {e}"))
        }),
    }
}
