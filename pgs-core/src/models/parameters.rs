/// The private label's list price, as a fraction of the brand's wholesale price
pub const DEFAULT_PRIVATE_LABEL_BASE_FACTOR: f64 = 0.97;
/// The brand-to-private-label price ratio above which the brand is penalised
pub const DEFAULT_GAP_THRESHOLD: f64 = 1.05;
/// The multiplier applied to the brand's demand once the gap threshold is exceeded
pub const DEFAULT_PENALTY_FACTOR: f64 = 0.70;
/// The floor for any transactional price
pub const DEFAULT_MIN_PRICE: f64 = 0.01;

/// The inputs to a single run of the pricing game.
///
/// SimulationParameters can only be obtained by validating a [`RawParameters`],
/// so holding one is proof that:
/// - every value is finite
/// - base demand, wholesale price and the price floor are strictly positive
/// - COGS and cross elasticity are non-negative
/// - own elasticity is strictly negative
/// - the private label base factor lies in (0, 1]
/// - the gap threshold exceeds 1 and the penalty factor lies in [0, 1]
///
/// COGS is expected to be below the wholesale price, but this is not enforced:
/// a loss-making configuration is still a well-defined game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParameters", into = "RawParameters")
)]
pub struct SimulationParameters {
    base_demand: f64,
    wholesale_price: f64,
    cogs: f64,
    own_elasticity: f64,
    cross_elasticity: f64,
    private_label_base_factor: f64,
    gap_threshold: f64,
    penalty_factor: f64,
    min_price: f64,
}

impl SimulationParameters {
    /// Baseline demand for either player at list prices
    pub fn base_demand(&self) -> f64 {
        self.base_demand
    }

    /// The brand's wholesale (list) price
    pub fn wholesale_price(&self) -> f64 {
        self.wholesale_price
    }

    /// Unit cost of goods sold, shared by both players
    pub fn cogs(&self) -> f64 {
        self.cogs
    }

    /// Own-price elasticity (negative)
    pub fn own_elasticity(&self) -> f64 {
        self.own_elasticity
    }

    /// Cross-price elasticity (non-negative)
    pub fn cross_elasticity(&self) -> f64 {
        self.cross_elasticity
    }

    /// The private label's list price as a fraction of the wholesale price
    pub fn private_label_base_factor(&self) -> f64 {
        self.private_label_base_factor
    }

    /// The price ratio above which the brand's demand is penalised
    pub fn gap_threshold(&self) -> f64 {
        self.gap_threshold
    }

    /// The multiplier applied to the brand's demand past the gap threshold
    pub fn penalty_factor(&self) -> f64 {
        self.penalty_factor
    }

    /// The floor for transactional prices
    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    /// The brand's list price, against which its discounts are taken
    pub fn barilla_base_price(&self) -> f64 {
        self.wholesale_price
    }

    /// The private label's list price, against which its discounts are taken
    pub fn private_label_base_price(&self) -> f64 {
        self.wholesale_price * self.private_label_base_factor
    }
}

/// The unvalidated form of [`SimulationParameters`].
///
/// This is what callers (a config layer, a JSON document, a test) fill in.
/// The penalty model and the price floor fall back to the `DEFAULT_*`
/// constants when omitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawParameters {
    /// Baseline demand for either player at list prices
    pub base_demand: f64,
    /// The brand's wholesale price
    pub wholesale_price: f64,
    /// Unit cost of goods sold
    pub cogs: f64,
    /// Own-price elasticity
    pub own_elasticity: f64,
    /// Cross-price elasticity
    pub cross_elasticity: f64,
    /// The private label's list price as a fraction of the wholesale price
    #[cfg_attr(feature = "serde", serde(default = "default_base_factor"))]
    pub private_label_base_factor: f64,
    /// The price ratio above which the brand's demand is penalised
    #[cfg_attr(feature = "serde", serde(default = "default_gap_threshold"))]
    pub gap_threshold: f64,
    /// The multiplier applied past the gap threshold
    #[cfg_attr(feature = "serde", serde(default = "default_penalty_factor"))]
    pub penalty_factor: f64,
    /// The floor for transactional prices
    #[cfg_attr(feature = "serde", serde(default = "default_min_price"))]
    pub min_price: f64,
}

#[cfg(feature = "serde")]
fn default_base_factor() -> f64 {
    DEFAULT_PRIVATE_LABEL_BASE_FACTOR
}

#[cfg(feature = "serde")]
fn default_gap_threshold() -> f64 {
    DEFAULT_GAP_THRESHOLD
}

#[cfg(feature = "serde")]
fn default_penalty_factor() -> f64 {
    DEFAULT_PENALTY_FACTOR
}

#[cfg(feature = "serde")]
fn default_min_price() -> f64 {
    DEFAULT_MIN_PRICE
}

impl RawParameters {
    /// Create raw parameters for the five market inputs, taking the defaults
    /// for the penalty model and the price floor.
    pub fn new(
        base_demand: f64,
        wholesale_price: f64,
        cogs: f64,
        own_elasticity: f64,
        cross_elasticity: f64,
    ) -> Self {
        Self {
            base_demand,
            wholesale_price,
            cogs,
            own_elasticity,
            cross_elasticity,
            private_label_base_factor: DEFAULT_PRIVATE_LABEL_BASE_FACTOR,
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            penalty_factor: DEFAULT_PENALTY_FACTOR,
            min_price: DEFAULT_MIN_PRICE,
        }
    }

    /// Validate into [`SimulationParameters`]
    pub fn validate(self) -> Result<SimulationParameters, ParameterError> {
        self.try_into()
    }
}

impl TryFrom<RawParameters> for SimulationParameters {
    type Error = ParameterError;

    /// Checks every field in declaration order and reports the first violation.
    fn try_from(value: RawParameters) -> Result<Self, Self::Error> {
        let RawParameters {
            base_demand,
            wholesale_price,
            cogs,
            own_elasticity,
            cross_elasticity,
            private_label_base_factor,
            gap_threshold,
            penalty_factor,
            min_price,
        } = value;

        let base_demand = positive("base_demand", base_demand)?;
        let wholesale_price = positive("wholesale_price", wholesale_price)?;
        let cogs = non_negative("cogs", cogs)?;

        if !(finite("own_elasticity", own_elasticity)? < 0.0) {
            return Err(ParameterError::OwnElasticity(own_elasticity));
        }

        let cross_elasticity = non_negative("cross_elasticity", cross_elasticity)?;

        let factor = finite("private_label_base_factor", private_label_base_factor)?;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ParameterError::BaseFactor(factor));
        }

        if !(finite("gap_threshold", gap_threshold)? > 1.0) {
            return Err(ParameterError::GapThreshold(gap_threshold));
        }

        let penalty = finite("penalty_factor", penalty_factor)?;
        if !(0.0..=1.0).contains(&penalty) {
            return Err(ParameterError::PenaltyFactor(penalty));
        }

        let min_price = positive("min_price", min_price)?;

        Ok(Self {
            base_demand,
            wholesale_price,
            cogs,
            own_elasticity,
            cross_elasticity,
            private_label_base_factor: factor,
            gap_threshold,
            penalty_factor: penalty,
            min_price,
        })
    }
}

impl From<SimulationParameters> for RawParameters {
    fn from(value: SimulationParameters) -> Self {
        Self {
            base_demand: value.base_demand,
            wholesale_price: value.wholesale_price,
            cogs: value.cogs,
            own_elasticity: value.own_elasticity,
            cross_elasticity: value.cross_elasticity,
            private_label_base_factor: value.private_label_base_factor,
            gap_threshold: value.gap_threshold,
            penalty_factor: value.penalty_factor,
            min_price: value.min_price,
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if finite(name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if finite(name, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::Negative { name, value })
    }
}

/// The ways in which a set of simulation parameters can be invalid
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// A value was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// The offending field
        name: &'static str,
        /// The offending value
        value: f64,
    },
    /// A value that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// The offending field
        name: &'static str,
        /// The offending value
        value: f64,
    },
    /// A value that must be non-negative was negative
    #[error("{name} must be non-negative, got {value}")]
    Negative {
        /// The offending field
        name: &'static str,
        /// The offending value
        value: f64,
    },
    /// Own elasticity must be negative
    #[error("own_elasticity must be negative, got {0}")]
    OwnElasticity(f64),
    /// The private label base factor must lie in (0, 1]
    #[error("private_label_base_factor must lie in (0, 1], got {0}")]
    BaseFactor(f64),
    /// The gap threshold must exceed 1
    #[error("gap_threshold must exceed 1, got {0}")]
    GapThreshold(f64),
    /// The penalty factor must lie in [0, 1]
    #[error("penalty_factor must lie in [0, 1], got {0}")]
    PenaltyFactor(f64),
}
