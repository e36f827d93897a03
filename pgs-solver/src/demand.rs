use pgs_core::models::SimulationParameters;

/// A transactional price together with the list price it is measured against
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Price {
    /// What the retailer actually pays
    pub price: f64,
    /// The undiscounted list price
    pub base: f64,
}

impl Price {
    /// The price after taking `discount` off `base`, floored at `min_price` so
    /// that no discount can drive a price to zero or below
    pub fn discounted(base: f64, discount: f64, min_price: f64) -> Self {
        Self {
            price: (base - discount).max(min_price),
            base,
        }
    }

    /// The price relative to its list price
    pub fn ratio(&self) -> f64 {
        self.price / self.base
    }
}

/// The one-sided penalty applied when a player prices too far above its competitor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapPenalty {
    /// The own/competitor price ratio above which the penalty applies
    pub threshold: f64,
    /// The multiplier applied to demand once past the threshold
    pub factor: f64,
}

impl GapPenalty {
    /// Whether `own` is priced strictly more than `threshold` times `competitor`
    pub fn applies(&self, own: f64, competitor: f64) -> bool {
        own / competitor > self.threshold
    }
}

/// A constant-elasticity demand curve shared by both players.
///
/// Demand is
/// `base_demand * (own / own_base)^own_elasticity * (competitor / competitor_base)^cross_elasticity`,
/// optionally scaled down by a [`GapPenalty`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandModel {
    /// Demand when both players sit at their list prices
    pub base_demand: f64,
    /// Response to the player's own price (negative)
    pub own_elasticity: f64,
    /// Response to the competitor's price (non-negative)
    pub cross_elasticity: f64,
}

impl DemandModel {
    /// Demand for the player priced at `own`, facing a competitor at `competitor`.
    ///
    /// Both prices must be strictly positive; [`Price::discounted`] guarantees
    /// this for any validated parameters.
    pub fn demand(&self, own: Price, competitor: Price, penalty: Option<GapPenalty>) -> f64 {
        let demand = self.base_demand
            * own.ratio().powf(self.own_elasticity)
            * competitor.ratio().powf(self.cross_elasticity);

        match penalty {
            Some(penalty) if penalty.applies(own.price, competitor.price) => {
                demand * penalty.factor
            }
            _ => demand,
        }
    }
}

impl From<&SimulationParameters> for DemandModel {
    fn from(params: &SimulationParameters) -> Self {
        Self {
            base_demand: params.base_demand(),
            own_elasticity: params.own_elasticity(),
            cross_elasticity: params.cross_elasticity(),
        }
    }
}

impl From<&SimulationParameters> for GapPenalty {
    fn from(params: &SimulationParameters) -> Self {
        Self {
            threshold: params.gap_threshold(),
            factor: params.penalty_factor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    const MODEL: DemandModel = DemandModel {
        base_demand: 18000.0,
        own_elasticity: -2.2,
        cross_elasticity: 0.9,
    };

    const PENALTY: GapPenalty = GapPenalty {
        threshold: 1.05,
        factor: 0.70,
    };

    #[test]
    fn list_prices_yield_base_demand() {
        let own = Price::discounted(1.20, 0.0, 0.01);
        let competitor = Price::discounted(1.164, 0.0, 0.01);
        assert_eq!(MODEL.demand(own, competitor, Some(PENALTY)), 18000.0);
    }

    #[test]
    fn discounts_are_floored() {
        let price = Price::discounted(1.20, 5.0, 0.01);
        assert_eq!(price.price, 0.01);
        assert_eq!(price.base, 1.20);
    }

    #[rstest]
    #[case::no_penalty(None)]
    #[case::penalty(Some(PENALTY))]
    fn demand_decreases_in_own_price(#[case] penalty: Option<GapPenalty>) {
        let competitor = Price {
            price: 1.0,
            base: 1.0,
        };
        // stay inside a single penalty regime: ratios 0.80..=1.00
        let demands = (0..=20)
            .map(|i| {
                let own = Price {
                    price: 0.80 + 0.01 * i as f64,
                    base: 1.0,
                };
                MODEL.demand(own, competitor, penalty)
            })
            .collect::<Vec<_>>();
        assert!(demands.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn demand_increases_in_competitor_price() {
        let own = Price {
            price: 1.0,
            base: 1.0,
        };
        let low = MODEL.demand(own, Price { price: 0.8, base: 1.0 }, None);
        let high = MODEL.demand(own, Price { price: 0.9, base: 1.0 }, None);
        assert!(high > low);
    }

    #[test]
    fn penalty_is_a_step_at_the_threshold() {
        let competitor = Price {
            price: 1.0,
            base: 1.0,
        };
        let at = Price {
            price: 1.05,
            base: 1.2,
        };
        let past = Price {
            price: 1.05 + 1e-9,
            base: 1.2,
        };

        // at the threshold itself the penalty does not apply
        assert_eq!(
            MODEL.demand(at, competitor, Some(PENALTY)),
            MODEL.demand(at, competitor, None)
        );

        // just past it, demand drops by exactly the penalty factor
        let penalised = MODEL.demand(past, competitor, Some(PENALTY));
        let unpenalised = MODEL.demand(past, competitor, None);
        assert_eq!(penalised, unpenalised * PENALTY.factor);
        assert_relative_eq!(
            penalised / MODEL.demand(at, competitor, None),
            PENALTY.factor,
            max_relative = 1e-6
        );
    }

    #[test]
    fn penalty_never_applies_when_cheaper() {
        let own = Price {
            price: 0.9,
            base: 1.0,
        };
        let competitor = Price {
            price: 1.0,
            base: 1.0,
        };
        assert_eq!(
            MODEL.demand(own, competitor, Some(PENALTY)),
            MODEL.demand(own, competitor, None)
        );
    }
}
