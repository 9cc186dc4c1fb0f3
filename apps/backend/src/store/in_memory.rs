//! Process-local game store backed by a mutex-guarded map.

use std::collections::{BTreeMap, HashMap};
use std::future::ready;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, warn};

use super::{AppliedUpdate, GameReducer, GameStore};
use crate::domain::state::{Game, GameId};
use crate::errors::domain::{DomainError, InfraErrorKind};

pub const DEFAULT_SUBSCRIPTION_BUFFER: usize = 64;

struct Inner {
    games: BTreeMap<GameId, Game>,
    watchers: HashMap<GameId, broadcast::Sender<Option<Game>>>,
    index_tx: broadcast::Sender<BTreeMap<GameId, Game>>,
}

impl Inner {
    /// Drop channels whose subscribers have all gone away.
    fn prune_watchers(&mut self) {
        self.watchers.retain(|_, tx| tx.receiver_count() > 0);
    }
}

/// Every mutation runs its reducer while holding the lock, so updates to a
/// game are strictly serialized and subscribers see them in commit order.
pub struct InMemoryGameStore {
    inner: Mutex<Inner>,
    buffer: usize,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::with_buffer(DEFAULT_SUBSCRIPTION_BUFFER)
    }

    /// `buffer` bounds how far a slow subscriber may fall behind before it
    /// starts skipping intermediate values.
    pub fn with_buffer(buffer: usize) -> Self {
        let buffer = buffer.max(1);
        let (index_tx, _rx) = broadcast::channel(buffer);
        Self {
            inner: Mutex::new(Inner {
                games: BTreeMap::new(),
                watchers: HashMap::new(),
                index_tx,
            }),
            buffer,
        }
    }
}

impl InMemoryGameStore {
    fn lock(&self) -> Result<MutexGuard<'_, Inner>, DomainError> {
        self.inner.lock().map_err(|e| {
            DomainError::infra(
                InfraErrorKind::StoreUnavailable,
                format!("Game store lock poisoned: {e}"),
            )
        })
    }
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self::new()
    }
}

fn follow<T>(current: T, rx: broadcast::Receiver<T>, label: String) -> BoxStream<'static, T>
where
    T: Clone + Send + 'static,
{
    let updates = BroadcastStream::new(rx).filter_map(move |item| {
        ready(match item {
            Ok(value) => Some(value),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                warn!(subscription = %label, skipped, "Subscriber lagged; skipping updates");
                None
            }
        })
    });
    stream::once(ready(current)).chain(updates).boxed()
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn apply_to(
        &self,
        game_id: &str,
        reducer: GameReducer,
    ) -> Result<AppliedUpdate, DomainError> {
        let mut inner = self.lock()?;
        let previous = inner.games.get(game_id).cloned();
        let current = reducer(previous.clone())?;

        let update = AppliedUpdate { previous, current };
        if !update.changed() {
            debug!(game_id, "Update left game unchanged");
            return Ok(update);
        }

        inner
            .games
            .insert(game_id.to_string(), update.current.clone());

        if let Some(tx) = inner.watchers.get(game_id) {
            // Fails only when every receiver is gone; pruned below.
            let _ = tx.send(Some(update.current.clone()));
        }
        inner.prune_watchers();
        let index = inner.games.clone();
        // No subscribers is fine.
        let _ = inner.index_tx.send(index);

        Ok(update)
    }

    async fn load(&self, game_id: &str) -> Result<Option<Game>, DomainError> {
        Ok(self.lock()?.games.get(game_id).cloned())
    }

    async fn games(&self) -> Result<BTreeMap<GameId, Game>, DomainError> {
        Ok(self.lock()?.games.clone())
    }

    async fn subscribe_to_game(
        &self,
        game_id: &str,
    ) -> Result<BoxStream<'static, Option<Game>>, DomainError> {
        let buffer = self.buffer;
        let mut inner = self.lock()?;
        let current = inner.games.get(game_id).cloned();
        inner.prune_watchers();
        let rx = inner
            .watchers
            .entry(game_id.to_string())
            .or_insert_with(|| broadcast::channel(buffer).0)
            .subscribe();
        drop(inner);

        Ok(follow(current, rx, format!("game:{game_id}")))
    }

    async fn all_games(&self) -> Result<BoxStream<'static, BTreeMap<GameId, Game>>, DomainError> {
        let inner = self.lock()?;
        let current = inner.games.clone();
        let rx = inner.index_tx.subscribe();
        drop(inner);

        Ok(follow(current, rx, "games".to_string()))
    }
}
