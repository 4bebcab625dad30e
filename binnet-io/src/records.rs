//! Decoding of raw table rows into typed records.
//!
//! Numeric fields use the lenient parsers from `binnet-core`, so a
//! malformed number becomes zero rather than failing the load.

use binnet_core::{parse_leading_f64, parse_leading_i64, Container, Coord, Path, WasteType};

/// Number of fields in a container row.
pub const CONTAINER_COLUMNS: usize = 9;

/// Column positions in a container row.
pub mod container_column {
    /// Identifier.
    pub const ID: usize = 0;
    /// X coordinate.
    pub const X: usize = 1;
    /// Y coordinate.
    pub const Y: usize = 2;
    /// Waste type label.
    pub const WASTE_TYPE: usize = 3;
    /// Capacity.
    pub const CAPACITY: usize = 4;
    /// Display name.
    pub const NAME: usize = 5;
    /// Street.
    pub const STREET: usize = 6;
    /// House number.
    pub const NUMBER: usize = 7;
    /// Public flag, `0` or `1`.
    pub const PUBLIC: usize = 8;
}

/// Number of fields in a path row.
pub const PATH_COLUMNS: usize = 3;

/// Column positions in a path row.
pub mod path_column {
    /// First endpoint.
    pub const A: usize = 0;
    /// Second endpoint.
    pub const B: usize = 1;
    /// Distance.
    pub const DISTANCE: usize = 2;
}

/// Decodes a container row. Missing fields read as empty text.
#[must_use]
pub fn decode_container(row: &[String]) -> Container {
    let field = |column: usize| row.get(column).map_or("", String::as_str);
    let optional = |column: usize| {
        Some(field(column))
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    let capacity = field(container_column::CAPACITY);

    Container {
        id: field(container_column::ID).to_string(),
        coord: Coord::new(
            parse_leading_f64(field(container_column::X)),
            parse_leading_f64(field(container_column::Y)),
        ),
        waste_type: WasteType::from_label(field(container_column::WASTE_TYPE)),
        capacity: parse_leading_f64(capacity),
        capacity_text: capacity.to_string(),
        name: optional(container_column::NAME),
        street: optional(container_column::STREET),
        number: optional(container_column::NUMBER),
        is_public: parse_leading_i64(field(container_column::PUBLIC)) != 0,
    }
}

/// Decodes a path row. Missing fields read as empty text.
#[must_use]
pub fn decode_path(row: &[String]) -> Path {
    let field = |column: usize| row.get(column).map_or("", String::as_str);

    Path::new(
        field(path_column::A),
        field(path_column::B),
        parse_leading_f64(field(path_column::DISTANCE)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| (*field).to_string()).collect()
    }

    #[test]
    fn test_decode_full_container() {
        let container = decode_container(&row(&[
            "17",
            "49.1950606",
            "16.6068374",
            "Colored glass",
            "1550.5",
            "Namesti Svobody",
            "Masarykova",
            "12a",
            "1",
        ]));

        assert_eq!(container.id, "17");
        assert_relative_eq!(container.coord.x, 49.195_060_6);
        assert_relative_eq!(container.coord.y, 16.606_837_4);
        assert_eq!(container.waste_type, WasteType::ColoredGlass);
        assert_relative_eq!(container.capacity, 1550.5);
        assert_eq!(container.capacity_text, "1550.5");
        assert_eq!(container.name.as_deref(), Some("Namesti Svobody"));
        assert_eq!(container.street.as_deref(), Some("Masarykova"));
        assert_eq!(container.number.as_deref(), Some("12a"));
        assert!(container.is_public);
    }

    #[test]
    fn test_decode_sparse_container() {
        let container = decode_container(&row(&["C1", "0", "0", "Paper", "10", "", "", "", "0"]));
        assert_eq!(container.name, None);
        assert_eq!(container.street, None);
        assert_eq!(container.number, None);
        assert!(!container.is_public);
    }

    #[test]
    fn test_decode_lenient_numbers() {
        let container = decode_container(&row(&[
            "C1", "x", "2.5deg", "Paper", "abc", "", "", "", "yes",
        ]));
        assert_relative_eq!(container.coord.x, 0.0);
        assert_relative_eq!(container.coord.y, 2.5);
        assert_relative_eq!(container.capacity, 0.0);
        assert_eq!(container.capacity_text, "abc");
        assert!(!container.is_public);
    }

    #[test]
    fn test_decode_path() {
        let path = decode_path(&row(&["C1", "C3", "2.5"]));
        assert_eq!(path, Path::new("C1", "C3", 2.5));

        let path = decode_path(&row(&["C1", "C3", "far"]));
        assert_relative_eq!(path.distance, 0.0);
    }
}
