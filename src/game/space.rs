use crate::Money;

#[derive(Clone, Debug)]
/// A cell on the game board.
///
/// Index 0 of every board is the GO space; everything after it is a
/// property. Asking a property for a payout or GO for rent is not a
/// runtime condition; the variants simply don't carry those fields.
pub enum Space {
    /// The GO space. Pays out to a player who lands on or passes it.
    Go {
        /// Amount credited per pass or landing.
        payout: Money,
    },
    /// An ownable space that charges rent.
    Property(Property),
}

impl Space {
    /// Return the display name of the space.
    pub fn name(&self) -> &str {
        match self {
            Space::Go { .. } => "GO",
            Space::Property(prop) => prop.name(),
        }
    }

    /// Return the property behind this space, or `None` for GO.
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Space::Property(prop) => Some(prop),
            Space::Go { .. } => None,
        }
    }
}

#[derive(Clone, Debug)]
/// An ownable space. The monetary terms are fixed at creation; the only
/// thing that ever changes is the owner, and only the game engine's
/// purchase and relinquish paths write it.
pub struct Property {
    /// Display name, unique within its board.
    name: String,
    /// Rent charged when a player lands here while the space is owned.
    rent: Money,
    /// Purchase price, five times rent. Computed once, never recomputed.
    price: Money,
    /// Index of the owning player in the game's roster, if any.
    pub(crate) owner: Option<usize>,
}

impl Property {
    const PRICE_FACTOR: Money = 5;

    /// Create an unowned property charging `rent`.
    pub fn new(name: String, rent: Money) -> Property {
        Property {
            name,
            rent,
            price: rent * Property::PRICE_FACTOR,
            owner: None,
        }
    }

    /// Return the property's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the rent charged to players landing here.
    pub fn rent(&self) -> Money {
        self.rent
    }

    /// Return the purchase price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Return the roster index of the owner, if the property is owned.
    pub fn owner(&self) -> Option<usize> {
        self.owner
    }
}
