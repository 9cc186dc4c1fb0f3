//! Test helpers for generating unique identifiers
//!
//! Integration tests that share a store use these to keep their games apart.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use lovecraft_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("game");
/// let id2 = unique_str("game");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique game id.
pub fn unique_game_id() -> String {
    unique_str("game")
}

/// Generate `count` distinct player ids that look like the external
/// identities players join with.
///
/// ```
/// use lovecraft_test_support::unique_helpers::unique_player_ids;
///
/// let ids = unique_player_ids(3);
/// assert_eq!(ids.len(), 3);
/// assert!(ids[0].ends_with("@example.test"));
/// ```
pub fn unique_player_ids(count: usize) -> Vec<String> {
    let run = Ulid::new();
    (0..count)
        .map(|i| format!("p{}-{}@example.test", i + 1, run))
        .collect()
}
