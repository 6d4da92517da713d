use super::space::{Property, Space};
use crate::Money;

#[derive(Clone, Debug, Default)]
/// The ordered ring of spaces making up a game board.
///
/// GO sits at index 0; movement past the last index re-enters at GO.
/// A board is built in one shot and never edited in place; rebuilding
/// replaces it wholesale.
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Build a board from a GO payout and one rent value per property.
    /// Properties are named after their 1-based board order, zero-padded
    /// to two digits: `Prop_01`, `Prop_02`, ...
    pub fn new(payout: Money, rents: &[Money]) -> Board {
        let mut spaces = Vec::with_capacity(rents.len() + 1);
        spaces.push(Space::Go { payout });

        for (seq, &rent) in rents.iter().enumerate() {
            let name = format!("Prop_{:02}", seq + 1);
            spaces.push(Space::Property(Property::new(name, rent)));
        }

        Board { spaces }
    }

    /// Return the number of spaces, GO included.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Return whether the board has been built yet.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Return the space at `index`, or `None` when out of range.
    pub fn space(&self, index: usize) -> Option<&Space> {
        self.spaces.get(index)
    }

    /// Return the payout for landing on or passing GO.
    pub fn payout(&self) -> Money {
        match self.spaces.first() {
            Some(Space::Go { payout }) => *payout,
            _ => 0,
        }
    }

    /// Iterate over the spaces in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Return the property at `index`, or `None` for GO and
    /// out-of-range indexes.
    pub(crate) fn property_mut(&mut self, index: usize) -> Option<&mut Property> {
        match self.spaces.get_mut(index) {
            Some(Space::Property(prop)) => Some(prop),
            _ => None,
        }
    }

    /// Iterate mutably over the property spaces, skipping GO.
    pub(crate) fn properties_mut(&mut self) -> impl Iterator<Item = &mut Property> {
        self.spaces.iter_mut().filter_map(|space| match space {
            Space::Property(prop) => Some(prop),
            Space::Go { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_sits_at_index_zero() {
        let board = Board::new(200, &[60, 60, 100]);
        assert_eq!(board.len(), 4);
        assert_eq!(board.payout(), 200);
        assert_eq!(board.space(0).map(Space::name), Some("GO"));
    }

    #[test]
    fn properties_are_named_in_board_order() {
        let rents: Vec<Money> = (0..12).map(|_| 50).collect();
        let board = Board::new(50, &rents);

        assert_eq!(board.space(1).map(Space::name), Some("Prop_01"));
        assert_eq!(board.space(9).map(Space::name), Some("Prop_09"));
        // Padding stops mattering at two digits.
        assert_eq!(board.space(10).map(Space::name), Some("Prop_10"));
        assert_eq!(board.space(12).map(Space::name), Some("Prop_12"));
    }

    #[test]
    fn each_property_takes_its_rent_from_the_list() {
        let board = Board::new(50, &[50, 75, 100]);
        let rents: Vec<Money> = board
            .iter()
            .filter_map(Space::as_property)
            .map(Property::rent)
            .collect();
        assert_eq!(rents, vec![50, 75, 100]);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let board = Board::new(50, &[50]);
        assert!(board.space(2).is_none());
        assert!(Board::default().space(0).is_none());
    }
}
