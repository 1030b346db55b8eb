//! User preference types for the CCM scheduler.
//!
//! A [`UserPreference`] biases the server-side scheduler toward or away from
//! certain outcomes. Each one pairs a statistical shape ([`ConstraintType`])
//! with the quantity it shapes ([`Objective`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CcmError, Result};

/// Tier assigned to every preference generated by the client.
pub const DEFAULT_TIER: i32 = 1;

/// Statistical shape of a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintType {
    /// Gaussian bounded by optional `min`/`max`. Requires `mu` and `sigma`.
    TruncatedGaussian,
    /// Logistic curve. Requires `bias` and `shape`.
    Logistic,
    /// Exponential decay. Requires `decay_begins` and `lambda_param`.
    Decay,
}

impl ConstraintType {
    /// Parameters that must be present, in checking order.
    pub fn required_parameters(&self) -> &'static [&'static str] {
        match self {
            ConstraintType::TruncatedGaussian => &["mu", "sigma"],
            ConstraintType::Logistic => &["bias", "shape"],
            ConstraintType::Decay => &["decay_begins", "lambda_param"],
        }
    }

    /// Check that `params` carries everything this shape needs.
    ///
    /// Fails on the first absent parameter in [`Self::required_parameters`] order.
    pub fn validate(&self, params: &PreferenceParams) -> Result<()> {
        for &parameter in self.required_parameters() {
            if !params.has(parameter) {
                return Err(CcmError::MissingParameter {
                    constraint_type: *self,
                    parameter,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintType::TruncatedGaussian => "TruncatedGaussian",
            ConstraintType::Logistic => "Logistic",
            ConstraintType::Decay => "Decay",
        };
        f.write_str(name)
    }
}

/// Scheduling quantity a preference applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    AverageMinutesBetweenContacts,
    AverageMinutesContactLength,
    MinimumMinutesContactLength,
    ContactMinutesPerDay,
    MaximumMinutesBetweenContacts,
    ContactCountPerDay,
    MinimumMinutesBetweenContacts,
    MaximumCumuBufferFillPercent,
    /// Fraction of tasks that should contain the band.
    FractionHasBand,
    EpochTimeStart,
    ExpectedWaitTime,
    MeanMidpointWithinVisibility,
    OrbitFrequency,
    AoiLatency,
}

impl Objective {
    /// Every objective, in wire-code order.
    pub const ALL: [Objective; 14] = [
        Objective::AverageMinutesBetweenContacts,
        Objective::AverageMinutesContactLength,
        Objective::MinimumMinutesContactLength,
        Objective::ContactMinutesPerDay,
        Objective::MaximumMinutesBetweenContacts,
        Objective::ContactCountPerDay,
        Objective::MinimumMinutesBetweenContacts,
        Objective::MaximumCumuBufferFillPercent,
        Objective::FractionHasBand,
        Objective::EpochTimeStart,
        Objective::ExpectedWaitTime,
        Objective::MeanMidpointWithinVisibility,
        Objective::OrbitFrequency,
        Objective::AoiLatency,
    ];

    /// Wire code used by the scheduling service. Code 3 is unassigned.
    pub fn code(&self) -> i32 {
        match self {
            Objective::AverageMinutesBetweenContacts => 1,
            Objective::AverageMinutesContactLength => 2,
            Objective::MinimumMinutesContactLength => 4,
            Objective::ContactMinutesPerDay => 5,
            Objective::MaximumMinutesBetweenContacts => 6,
            Objective::ContactCountPerDay => 7,
            Objective::MinimumMinutesBetweenContacts => 8,
            Objective::MaximumCumuBufferFillPercent => 9,
            Objective::FractionHasBand => 10,
            Objective::EpochTimeStart => 11,
            Objective::ExpectedWaitTime => 12,
            Objective::MeanMidpointWithinVisibility => 13,
            Objective::OrbitFrequency => 14,
            Objective::AoiLatency => 15,
        }
    }

    /// Look up an objective by its wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.code() == code)
    }
}

/// Shape parameters and scoping fields for a preference.
///
/// Every field is optional; which ones are required depends on the
/// [`ConstraintType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceParams {
    /// Relative emphasis against other preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    // Truncated Gaussian
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mu: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    // Decay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_begins: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_param: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_horizon: Option<i32>,

    // Logistic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<f64>,

    /// Epoch seconds the preference starts applying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Epoch seconds the preference stops applying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    /// Restrict to these ground sites (empty means all).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub site_ids: Vec<String>,
    /// Restrict to these satellites (empty means all).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub norad_ids: Vec<String>,
}

impl PreferenceParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a truncated Gaussian with the given mean and deviation.
    pub fn gaussian(mu: f64, sigma: f64) -> Self {
        Self::new().mu(mu).sigma(sigma)
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the mean.
    pub fn mu(mut self, mu: f64) -> Self {
        self.mu = Some(mu);
        self
    }

    /// Set the standard deviation.
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }

    /// Set the lower truncation bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper truncation bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn decay_begins(mut self, decay_begins: f64) -> Self {
        self.decay_begins = Some(decay_begins);
        self
    }

    pub fn lambda_param(mut self, lambda_param: f64) -> Self {
        self.lambda_param = Some(lambda_param);
        self
    }

    pub fn decay_horizon(mut self, decay_horizon: i32) -> Self {
        self.decay_horizon = Some(decay_horizon);
        self
    }

    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = Some(bias);
        self
    }

    pub fn shape(mut self, shape: f64) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Limit the preference to a window of epoch seconds.
    pub fn window(mut self, start_time: i64, end_time: i64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    pub fn events_per_hour(mut self, events_per_hour: f64) -> Self {
        self.events_per_hour = Some(events_per_hour);
        self
    }

    pub fn unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    pub fn site(mut self, site_id: impl Into<String>) -> Self {
        self.site_ids.push(site_id.into());
        self
    }

    pub fn satellite(mut self, norad_id: impl Into<String>) -> Self {
        self.norad_ids.push(norad_id.into());
        self
    }

    /// Returns true if the named shape parameter is set.
    pub fn has(&self, parameter: &str) -> bool {
        match parameter {
            "mu" => self.mu.is_some(),
            "sigma" => self.sigma.is_some(),
            "min" => self.min.is_some(),
            "max" => self.max.is_some(),
            "start" => self.start.is_some(),
            "decay_begins" => self.decay_begins.is_some(),
            "lambda_param" => self.lambda_param.is_some(),
            "decay_horizon" => self.decay_horizon.is_some(),
            "bias" => self.bias.is_some(),
            "shape" => self.shape.is_some(),
            _ => false,
        }
    }
}

/// A validated scheduling preference owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub user_id: String,
    pub tier: i32,
    pub constraint_type: ConstraintType,
    pub objective: Objective,
    #[serde(flatten)]
    pub params: PreferenceParams,
}

impl UserPreference {
    /// Validate `params` against `constraint_type` and build the preference.
    ///
    /// The result is not attached to any profile.
    pub fn generate(
        user_id: impl Into<String>,
        constraint_type: ConstraintType,
        objective: Objective,
        params: PreferenceParams,
    ) -> Result<Self> {
        constraint_type.validate(&params)?;

        Ok(Self {
            user_id: user_id.into(),
            tier: DEFAULT_TIER,
            constraint_type,
            objective,
            params,
        })
    }
}
