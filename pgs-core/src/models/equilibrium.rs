use super::Player;
use std::ops::Deref;

/// A player's most profitable discount against one fixed opponent discount
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestResponse {
    /// The opponent's discount
    pub given: f64,
    /// The responding player's profit-maximising discount
    pub response: f64,
    /// The position of `response` in the responding player's grid
    pub response_index: usize,
}

/// The best response of one player to every discount of the other.
///
/// Entries follow the opponent's grid in ascending order: for the brand, one
/// entry per private label row; for the private label, one entry per brand
/// column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestResponseMap {
    player: Player,
    responses: Vec<BestResponse>,
}

impl BestResponseMap {
    /// Wraps a list of responses, which must follow the opponent's grid order
    pub fn new(player: Player, responses: Vec<BestResponse>) -> Self {
        Self { player, responses }
    }

    /// The responding player
    pub fn player(&self) -> Player {
        self.player
    }

    /// The response to the opponent's discount within `tolerance` of `given`
    pub fn lookup(&self, given: f64, tolerance: f64) -> Option<&BestResponse> {
        self.responses
            .iter()
            .find(|entry| (entry.given - given).abs() <= tolerance)
    }
}

impl Deref for BestResponseMap {
    type Target = [BestResponse];

    fn deref(&self) -> &Self::Target {
        &self.responses
    }
}

/// A pair of discounts that are best responses to each other
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NashPoint {
    /// The private label's discount
    pub pl_discount: f64,
    /// The brand's discount
    pub barilla_discount: f64,
    /// The brand's profit at this pair
    pub barilla_profit: f64,
    /// The private label's profit at this pair
    pub pl_profit: f64,
}

/// All pure-strategy equilibria of a payoff grid, ordered by ascending
/// private label discount.
///
/// An empty set is a legitimate outcome: it means no pair of discounts is
/// mutually optimal under the given assumptions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NashSet(Vec<NashPoint>);

impl Deref for NashSet {
    type Target = [NashPoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<NashPoint> for NashSet {
    fn from_iter<I: IntoIterator<Item = NashPoint>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl IntoIterator for NashSet {
    type Item = NashPoint;
    type IntoIter = std::vec::IntoIter<NashPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_uses_tolerance() {
        let map = BestResponseMap::new(
            Player::PrivateLabel,
            vec![
                BestResponse {
                    given: 0.0,
                    response: 0.15,
                    response_index: 3,
                },
                BestResponse {
                    given: 0.05,
                    response: 0.15,
                    response_index: 3,
                },
            ],
        );
        assert_eq!(map.lookup(0.05000000000000001, 0.025).unwrap().given, 0.05);
        assert!(map.lookup(0.1, 0.025).is_none());
        assert_eq!(map.len(), 2);
        assert_eq!(map.player(), Player::PrivateLabel);
    }

    #[test]
    fn nash_set_serializes_as_list() {
        let set = NashSet::default();
        assert!(set.is_empty());
        assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    }
}
