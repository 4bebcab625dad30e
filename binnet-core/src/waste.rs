//! Waste type categories.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Waste category collected by a container.
///
/// The six canonical categories each carry a single-character code used
/// in filter criteria and station type strings. Labels outside that set
/// are kept verbatim so ingestion never rejects a row for its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WasteType {
    /// Plastics and aluminium (`A`).
    PlasticsAndAluminium,
    /// Paper (`P`).
    Paper,
    /// Biodegradable waste (`B`).
    Biodegradable,
    /// Clear glass (`G`).
    ClearGlass,
    /// Colored glass (`C`).
    ColoredGlass,
    /// Textile (`T`).
    Textile,
    /// Any label outside the canonical set.
    Other(String),
}

impl WasteType {
    /// All canonical categories, in code order `A P B G C T`.
    pub const CANONICAL: [WasteType; 6] = [
        WasteType::PlasticsAndAluminium,
        WasteType::Paper,
        WasteType::Biodegradable,
        WasteType::ClearGlass,
        WasteType::ColoredGlass,
        WasteType::Textile,
    ];

    /// Code rendered for labels outside the canonical set.
    pub const OTHER_CODE: char = '?';

    /// Maps a dataset label to its category.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Plastics and Aluminium" => Self::PlasticsAndAluminium,
            "Paper" => Self::Paper,
            "Biodegradable waste" => Self::Biodegradable,
            "Clear glass" => Self::ClearGlass,
            "Colored glass" => Self::ColoredGlass,
            "Textile" => Self::Textile,
            other => Self::Other(other.to_string()),
        }
    }

    /// Maps a single-character filter code to its category.
    ///
    /// # Errors
    /// Returns [`Error::UnknownWasteCode`] for anything outside `A P B G C T`.
    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'A' => Ok(Self::PlasticsAndAluminium),
            'P' => Ok(Self::Paper),
            'B' => Ok(Self::Biodegradable),
            'G' => Ok(Self::ClearGlass),
            'C' => Ok(Self::ColoredGlass),
            'T' => Ok(Self::Textile),
            other => Err(Error::UnknownWasteCode(other)),
        }
    }

    /// Returns the canonical label as it appears in the dataset.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PlasticsAndAluminium => "Plastics and Aluminium",
            Self::Paper => "Paper",
            Self::Biodegradable => "Biodegradable waste",
            Self::ClearGlass => "Clear glass",
            Self::ColoredGlass => "Colored glass",
            Self::Textile => "Textile",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Returns the single-character code, `?` for non-canonical labels.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::PlasticsAndAluminium => 'A',
            Self::Paper => 'P',
            Self::Biodegradable => 'B',
            Self::ClearGlass => 'G',
            Self::ColoredGlass => 'C',
            Self::Textile => 'T',
            Self::Other(_) => Self::OTHER_CODE,
        }
    }

    /// Returns true for the six canonical categories.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_code_round_trip() {
        for waste in WasteType::CANONICAL {
            assert_eq!(WasteType::from_label(waste.label()), waste);
            assert_eq!(WasteType::from_code(waste.code()).unwrap(), waste);
        }
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let waste = WasteType::from_label("Batteries");
        assert_eq!(waste, WasteType::Other("Batteries".to_string()));
        assert_eq!(waste.label(), "Batteries");
        assert_eq!(waste.code(), '?');
        assert!(!waste.is_canonical());
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(WasteType::from_code('x'), Err(Error::UnknownWasteCode('x')));
        // Codes are case sensitive.
        assert!(WasteType::from_code('p').is_err());
    }
}
