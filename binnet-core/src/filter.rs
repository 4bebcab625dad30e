//! Container filter criteria.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Container, Error, Result, WasteType};

/// Maximum number of waste codes kept from a code string.
pub const MAX_WASTE_CODES: usize = 8;

/// Inclusive capacity range. `0-0` means "no restriction".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapacityRange {
    /// Lower bound (inclusive).
    pub min: i64,
    /// Upper bound (inclusive).
    pub max: i64,
}

impl CapacityRange {
    /// Range that matches every capacity.
    pub const ANY: Self = Self { min: 0, max: 0 };

    /// Creates a range, rejecting `min > max`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacityRange`] when `min` exceeds `max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidCapacityRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns true for the `0-0` range.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Checks whether a truncated capacity lies in the range.
    #[must_use]
    pub fn contains(&self, capacity: i64) -> bool {
        self.is_unbounded() || (self.min..=self.max).contains(&capacity)
    }
}

impl FromStr for CapacityRange {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let syntax = || Error::CapacitySyntax(text.to_string());
        let body = text.trim();
        // A leading sign belongs to the lower bound, not the separator.
        let sign = usize::from(body.starts_with(['-', '+']));
        let split = body
            .get(sign..)
            .and_then(|rest| rest.find('-'))
            .map(|index| index + sign)
            .ok_or_else(syntax)?;
        let (min, max) = (&body[..split], &body[split + 1..]);
        let min = min.trim().parse::<i64>().map_err(|_| syntax())?;
        let max = max.trim().parse::<i64>().map_err(|_| syntax())?;
        Self::new(min, max)
    }
}

/// Criteria a container must satisfy to appear in the filtered listing.
///
/// The default criteria match every container.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterCriteria {
    /// Accepted waste categories; empty accepts all.
    pub waste_types: Vec<WasteType>,
    /// Accepted capacity range.
    pub capacity: CapacityRange,
    /// Required public flag; `None` accepts both.
    pub public: Option<bool>,
}

impl FilterCriteria {
    /// Creates criteria that match everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds criteria from a string of single-character waste codes.
    ///
    /// Only the first [`MAX_WASTE_CODES`] codes are kept; repeated codes
    /// are ignored.
    ///
    /// # Errors
    /// Returns [`Error::UnknownWasteCode`] for a code outside `A P B G C T`.
    pub fn from_codes(codes: &str) -> Result<Self> {
        let mut criteria = Self::new();
        for code in codes.chars().take(MAX_WASTE_CODES) {
            criteria = criteria.with_waste_type(WasteType::from_code(code)?);
        }
        Ok(criteria)
    }

    /// Adds an accepted waste category.
    #[must_use]
    pub fn with_waste_type(mut self, waste_type: WasteType) -> Self {
        if !self.waste_types.contains(&waste_type) {
            self.waste_types.push(waste_type);
        }
        self
    }

    /// Sets the accepted capacity range.
    #[must_use]
    pub fn with_capacity(mut self, capacity: CapacityRange) -> Self {
        self.capacity = capacity;
        self
    }

    /// Requires the given public flag.
    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    /// Returns true when no criterion restricts the result.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.waste_types.is_empty() && self.capacity.is_unbounded() && self.public.is_none()
    }

    /// Checks the waste category criterion.
    #[must_use]
    pub fn matches_waste_type(&self, container: &Container) -> bool {
        self.waste_types.is_empty()
            || (container.waste_type.is_canonical()
                && self
                    .waste_types
                    .iter()
                    .any(|wanted| *wanted == container.waste_type))
    }

    /// Checks the capacity criterion.
    #[must_use]
    pub fn matches_capacity(&self, container: &Container) -> bool {
        self.capacity.contains(container.capacity_truncated())
    }

    /// Checks the public flag criterion.
    #[must_use]
    pub fn matches_public(&self, container: &Container) -> bool {
        self.public.is_none_or(|public| public == container.is_public)
    }

    /// Checks all criteria.
    #[must_use]
    pub fn matches(&self, container: &Container) -> bool {
        self.matches_waste_type(container)
            && self.matches_capacity(container)
            && self.matches_public(container)
    }
}
