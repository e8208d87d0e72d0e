//! Error types shared by the engine, the store and the arena.

use thiserror::Error;

use crate::core::FighterId;

/// Everything that can make a duel operation fail.
///
/// An unknown or exhausted item id is not an error: `use_item` reports it
/// as [`ItemOutcome::NoSuchItem`](crate::rules::ItemOutcome::NoSuchItem).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DuelError {
    /// No game is stored under this identifier.
    #[error("game not found: {0}")]
    GameNotFound(String),

    /// A fighter tried to act while it was the other fighter's turn.
    #[error("not {attempted}'s turn (current turn: {current})")]
    WrongTurn {
        attempted: FighterId,
        current: FighterId,
    },

    /// The round has ended; only `start_new_round` is accepted.
    #[error("round is over; start a new round first")]
    RoundOver,

    /// A region tag that is neither `bisaya` nor `tagalog`.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A session lock was poisoned by a panicking holder.
    #[error("session lock poisoned: {0}")]
    Poisoned(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DuelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_turn_message() {
        let err = DuelError::WrongTurn {
            attempted: FighterId::Opponent,
            current: FighterId::Player,
        };
        assert_eq!(err.to_string(), "not opponent's turn (current turn: player)");
    }

    #[test]
    fn test_not_found_message() {
        let err = DuelError::GameNotFound("game_1".to_string());
        assert_eq!(err.to_string(), "game not found: game_1");
    }
}
