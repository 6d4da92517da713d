use crate::Money;
use lazy_static::lazy_static;

/// The GO payout of the reference board.
pub const STANDARD_PAYOUT: Money = 50;

lazy_static! {
    /// Rent schedule for the 24 properties of the reference board.
    /// Rents climb from 50 to 350 in bands of three spaces.
    pub static ref STANDARD_RENTS: Vec<Money> = vec![
        50, 50, 50, 75, 75, 75, 100, 100, 100, 150, 150, 150,
        200, 200, 200, 250, 250, 250, 300, 300, 300, 350, 350, 350,
    ];
}
