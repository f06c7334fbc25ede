//! Work center: a production resource with cost and capacity attributes.

use serde::{Deserialize, Serialize};

use crate::error::{GearGuardError, ValidationError};
use crate::id::WorkCenterId;

const DEFAULT_COST_PER_HOUR: f64 = 100.0;
const DEFAULT_CAPACITY_TIME_EFFICIENCY: f64 = 100.0;
const DEFAULT_OEE_TARGET: f64 = 85.0;

/// A persisted work center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCenter {
    pub id: WorkCenterId,
    pub code: String,
    pub name: String,
    pub tag: Option<String>,
    pub alternative_workcenters: Option<String>,
    pub cost_per_hour: f64,
    pub capacity_time_efficiency: f64,
    pub oee_target: f64,
    pub capacity_per_day: Option<i64>,
}

/// A work center that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkCenter {
    pub code: String,
    pub name: String,
    pub tag: Option<String>,
    pub alternative_workcenters: Option<String>,
    pub cost_per_hour: f64,
    pub capacity_time_efficiency: f64,
    pub oee_target: f64,
    pub capacity_per_day: Option<i64>,
}

impl WorkCenter {
    /// Create a builder for constructing a [`NewWorkCenter`].
    #[must_use]
    pub fn builder() -> WorkCenterBuilder {
        WorkCenterBuilder::default()
    }
}

impl NewWorkCenter {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] when `code` or `name` is empty,
    /// a numeric attribute is negative, or the OEE target exceeds 100.
    pub fn validate(&self) -> Result<(), GearGuardError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::MissingField("code").into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.cost_per_hour < 0.0 {
            return Err(ValidationError::Negative("costPerHour").into());
        }
        if self.capacity_time_efficiency < 0.0 {
            return Err(ValidationError::Negative("capacityTimeEfficiency").into());
        }
        if !(0.0..=100.0).contains(&self.oee_target) {
            return Err(ValidationError::OutOfRange {
                field: "oeeTarget",
                min: 0,
                max: 100,
            }
            .into());
        }
        if self.capacity_per_day.is_some_and(|cap| cap < 0) {
            return Err(ValidationError::Negative("capacityPerDay").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewWorkCenter`].
#[derive(Debug, Default)]
pub struct WorkCenterBuilder {
    code: Option<String>,
    name: Option<String>,
    tag: Option<String>,
    alternative_workcenters: Option<String>,
    cost_per_hour: Option<f64>,
    capacity_time_efficiency: Option<f64>,
    oee_target: Option<f64>,
    capacity_per_day: Option<i64>,
}

impl WorkCenterBuilder {
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn alternative_workcenters(mut self, alternatives: impl Into<String>) -> Self {
        self.alternative_workcenters = Some(alternatives.into());
        self
    }

    #[must_use]
    pub fn cost_per_hour(mut self, cost: f64) -> Self {
        self.cost_per_hour = Some(cost);
        self
    }

    #[must_use]
    pub fn capacity_time_efficiency(mut self, efficiency: f64) -> Self {
        self.capacity_time_efficiency = Some(efficiency);
        self
    }

    #[must_use]
    pub fn oee_target(mut self, target: f64) -> Self {
        self.oee_target = Some(target);
        self
    }

    #[must_use]
    pub fn capacity_per_day(mut self, capacity: i64) -> Self {
        self.capacity_per_day = Some(capacity);
        self
    }

    /// Consume the builder, validate, and return a [`NewWorkCenter`].
    ///
    /// # Errors
    ///
    /// Returns [`GearGuardError::Validation`] if invariants fail.
    pub fn build(self) -> Result<NewWorkCenter, GearGuardError> {
        let work_center = NewWorkCenter {
            code: self.code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            tag: self.tag,
            alternative_workcenters: self.alternative_workcenters,
            cost_per_hour: self.cost_per_hour.unwrap_or(DEFAULT_COST_PER_HOUR),
            capacity_time_efficiency: self
                .capacity_time_efficiency
                .unwrap_or(DEFAULT_CAPACITY_TIME_EFFICIENCY),
            oee_target: self.oee_target.unwrap_or(DEFAULT_OEE_TARGET),
            capacity_per_day: self.capacity_per_day,
        };
        work_center.validate()?;
        Ok(work_center)
    }
}
