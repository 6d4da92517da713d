mod board;
pub use board::Board;

mod globals;
pub use globals::{STANDARD_PAYOUT, STANDARD_RENTS};

mod outcome;
pub use outcome::{BuyError, MoveOutcome, MoveReport};

mod player;
pub use player::{Player, Roster};

mod space;
pub use space::{Property, Space};

use crate::Money;

/// A game of simplified property trading: one board, one roster of
/// players, and the rules that tie them together.
///
/// The game owns both collections outright and is the only writer to
/// either. Every query hands back a read-only view, so rent, purchase
/// and elimination bookkeeping cannot be bypassed from outside.
#[derive(Clone, Debug, Default)]
pub struct Game {
    /// The ring of spaces in play. Empty until `create_spaces` runs.
    board: Board,
    /// Players, in enrollment order. Properties refer to their owners
    /// by index in here.
    roster: Roster,
}

impl Game {
    /*********        SETUP        *********/

    /// Return a new game with no board and no players.
    pub fn new() -> Game {
        Game::default()
    }

    /// Build the board: GO at index 0 paying `payout`, then one
    /// property per entry of `rents`, named in board order.
    ///
    /// Calling this again replaces the board outright. Players keep
    /// their balances and positions, so a mid-game rebuild strands them
    /// on spaces with different terms and wipes every ownership record;
    /// reconciling that is the caller's job, not the engine's.
    pub fn create_spaces(&mut self, payout: Money, rents: &[Money]) {
        if !self.board.is_empty() {
            log::warn!("replacing a live board; ownership does not carry over");
        }

        self.board = Board::new(payout, rents);
    }

    /// Enroll a player standing on GO with the given starting balance.
    /// A name already on the roster is left alone.
    pub fn create_player(&mut self, name: &str, balance: Money) {
        self.roster.enroll(name, balance);
    }

    /*********        QUERIES        *********/

    /// Return the space at `index`, or `None` when out of range.
    pub fn get_space(&self, index: usize) -> Option<&Space> {
        self.board.space(index)
    }

    /// Return the named player, if enrolled.
    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.roster.by_name(name)
    }

    /// Return the named player's balance, if enrolled.
    pub fn get_player_account_balance(&self, name: &str) -> Option<Money> {
        self.get_player(name).map(Player::balance)
    }

    /// Return the board index the named player is standing on, if
    /// enrolled.
    pub fn get_player_current_position(&self, name: &str) -> Option<usize> {
        self.get_player(name).map(Player::position)
    }

    /// Return the name of the player owning the space at `index`.
    /// `None` for GO, unowned spaces and out-of-range indexes.
    pub fn get_space_owner(&self, index: usize) -> Option<&str> {
        self.board
            .space(index)?
            .as_property()?
            .owner()
            .map(|i| self.roster.get(i).name())
    }

    /// Return the board in play.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Iterate over the enrolled players.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter()
    }

    /*********        RULES        *********/

    /// Let the named player buy the property they are standing on,
    /// paying five times its rent.
    ///
    /// Refused, with no state change, when the player is unknown or
    /// eliminated, is standing on GO, the space already has an owner,
    /// or the price exceeds their balance.
    pub fn buy_space(&mut self, name: &str) -> Result<(), BuyError> {
        let index = self.roster.lookup(name).ok_or(BuyError::UnknownPlayer)?;
        let player = self.roster.get(index);

        if player.is_eliminated() {
            return Err(BuyError::Eliminated);
        }

        let position = player.position();
        if position == 0 {
            return Err(BuyError::OnGo);
        }

        let balance = player.balance();
        let prop = self
            .board
            .property_mut(position)
            .ok_or(BuyError::OffBoard)?;

        if prop.owner.is_some() {
            return Err(BuyError::AlreadyOwned);
        }

        let price = prop.price();
        if price > balance {
            return Err(BuyError::InsufficientFunds { price, balance });
        }

        prop.owner = Some(index);
        log::info!("{} buys {} for {}", name, prop.name(), price);
        self.roster.get_mut(index).apply_delta(-(price as i64));

        Ok(())
    }

    /// Move the named player clockwise by `steps` spaces.
    ///
    /// Passing or landing on GO credits the payout once. Landing on an
    /// owned property transfers rent: the mover pays what they can
    /// (their balance floors at 0) while the owner is credited the full
    /// amount, including when mover and owner are the same player. A
    /// mover left with exactly nothing is eliminated on the spot, and
    /// every property they owned returns to the market before the call
    /// returns.
    ///
    /// Unknown and eliminated players do not move, and neither does
    /// anyone whose position fell off a rebuilt board; those outcomes
    /// change no state at all.
    pub fn move_player(&mut self, name: &str, steps: usize) -> MoveOutcome {
        let index = match self.roster.lookup(name) {
            Some(index) => index,
            None => return MoveOutcome::UnknownPlayer,
        };

        if self.roster.get(index).is_eliminated() {
            return MoveOutcome::Eliminated;
        }

        let size = self.board.len();
        let mut landing = self.roster.get(index).position() + steps;

        // Steps are die-sized, so one lap back is the most a move can wrap.
        let passed_go = landing >= size;
        if passed_go {
            landing -= size;
        }
        if landing >= size {
            // Still out of range: the board shrank under the player
            // (or was never built).
            return MoveOutcome::OffBoard;
        }

        if passed_go {
            let payout = self.board.payout();
            self.roster.get_mut(index).apply_delta(payout as i64);
            log::debug!("{} passes GO and collects {}", name, payout);
        }

        self.roster.get_mut(index).set_position(landing);

        // Landing exactly on GO skips rent entirely.
        if landing == 0 {
            return MoveOutcome::Moved(MoveReport {
                position: 0,
                passed_go,
                rent: None,
                eliminated: false,
            });
        }

        let (rent, owner) = match self.board.space(landing) {
            Some(Space::Property(prop)) => (prop.rent(), prop.owner()),
            // GO lives only at index 0, which returned above, and
            // `landing` was bounds-checked.
            _ => unreachable!(),
        };

        let mut report = MoveReport {
            position: landing,
            passed_go,
            rent: None,
            eliminated: false,
        };

        if let Some(owner) = owner {
            // The owner is credited in full even when the floor at 0
            // means less than `rent` actually left the mover's account.
            self.roster.get_mut(index).apply_delta(-(rent as i64));
            self.roster.get_mut(owner).apply_delta(rent as i64);
            report.rent = Some(rent);
            log::debug!(
                "{} pays {} rent to {}",
                name,
                rent,
                self.roster.get(owner).name()
            );

            if self.roster.get(index).is_eliminated() {
                report.eliminated = true;
                self.relinquish(index);
            }
        }

        MoveOutcome::Moved(report)
    }

    /// Release every property the player at `index` owns back to the
    /// market. Runs synchronously inside the move that eliminated them.
    fn relinquish(&mut self, index: usize) {
        let mut released = 0;
        for prop in self.board.properties_mut() {
            if prop.owner == Some(index) {
                prop.owner = None;
                released += 1;
            }
        }

        log::info!(
            "{} is eliminated; {} properties return to the market",
            self.roster.get(index).name(),
            released
        );
    }

    /// Check for a winner: the sole player still holding money.
    ///
    /// Returns `None` while zero or two-plus players are solvent. A
    /// one-player roster wins immediately, so callers wanting a real
    /// contest should enroll at least two players before leaning on
    /// this.
    pub fn check_game_over(&self) -> Option<&str> {
        let mut solvent = self.roster.iter().filter(|p| p.balance() > 0);

        match (solvent.next(), solvent.next()) {
            (Some(winner), None) => Some(winner.name()),
            _ => None,
        }
    }
}
