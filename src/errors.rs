//! Reasons an intent was ignored.
//!
//! The public intents never fail: they log one of these and leave the state
//! as it was. The `try_*` variants hand the reason back to callers that want
//! to show it.

use thiserror::Error;

use crate::game_state::chess_types::{GameOverState, PieceOwner};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentRejection {
    #[error("no tile is selected")]
    NoSelection,

    #[error("selected tile at col {col}, row {row} holds no piece")]
    EmptySelection { col: u8, row: u8 },

    #[error("it is {expected:?}'s turn, not {actual:?}'s")]
    WrongTurn {
        expected: PieceOwner,
        actual: PieceOwner,
    },

    #[error("no playable tile at q {q}, r {r}")]
    NoSuchTile { q: i8, r: i8 },

    #[error("selected piece has no move to q {q}, r {r}")]
    NoMatchingMove { q: i8, r: i8 },

    #[error("a promotion choice is pending")]
    PromotionPending,

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("move reaches a promotion tile but names no piece kind")]
    MissingPromotionChoice,

    #[error("game is over: {0:?}")]
    GameOver(GameOverState),

    #[error("no piece tagged {0}")]
    UnknownTag(String),
}

pub type IntentResult<T> = Result<T, IntentRejection>;
