use crate::Money;
use thiserror::Error;

/// Why a purchase attempt was refused. A refusal leaves all game state
/// untouched; callers that only care about the success flag can treat
/// any `Err` the way the silent `false` used to read.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuyError {
    /// The name matches nobody on the roster.
    #[error("no such player")]
    UnknownPlayer,

    /// Eliminated players cannot buy.
    #[error("player has been eliminated")]
    Eliminated,

    /// GO can never be owned.
    #[error("the GO space cannot be bought")]
    OnGo,

    /// Somebody already owns the space; ownership never changes hands
    /// through a purchase.
    #[error("space is already owned")]
    AlreadyOwned,

    /// The asking price exceeds the player's balance.
    #[error("price {price} exceeds balance {balance}")]
    InsufficientFunds { price: Money, balance: Money },

    /// The player's position is off the current board. Only reachable
    /// after the board was rebuilt smaller under a live game.
    #[error("player's position is off the board")]
    OffBoard,
}

/// What a call to `move_player` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The name matches nobody on the roster; nothing happened.
    UnknownPlayer,
    /// The player was already eliminated; eliminated players never
    /// move again.
    Eliminated,
    /// No board, or the player's position is beyond the current board's
    /// edge after a rebuild.
    OffBoard,
    /// The player moved.
    Moved(MoveReport),
}

/// The effects of a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// The index the player landed on.
    pub position: usize,
    /// Whether the player collected the GO payout on the way.
    pub passed_go: bool,
    /// The rent credited to the landing space's owner, if it had one.
    /// This is the full nominal rent; the payer may have covered less
    /// if their balance floored at 0.
    pub rent: Option<Money>,
    /// Whether paying rent left the mover at a balance of exactly 0,
    /// eliminating them and releasing all their properties.
    pub eliminated: bool,
}
