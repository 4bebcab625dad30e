//! Text output for listings.

use std::io::Write;

use binnet_algorithms::{ContainerEntry, StationEntry};
use binnet_core::Container;

use crate::Result;

/// Writes listings as line-oriented text.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    /// Wraps an output sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one line per container:
    /// `ID: <id>, Type: <label>, Capacity: <capacity>, Address: <street>, Neighbors: <ids>`.
    ///
    /// Capacity is printed as written in the dataset.
    ///
    /// # Errors
    /// Returns an error if the sink fails.
    pub fn write_container_listing(&mut self, entries: &[ContainerEntry<'_>]) -> Result<()> {
        for entry in entries {
            let container = entry.container;
            writeln!(
                self.writer,
                "ID: {}, Type: {}, Capacity: {}, Address: {}, Neighbors: {}",
                container.id,
                container.waste_type,
                container.capacity_text,
                container.street_or_empty(),
                entry.neighbors.join(" ")
            )?;
        }
        Ok(())
    }

    /// Writes one line per station: `<id>;<type codes>;<neighbor ids>`.
    ///
    /// # Errors
    /// Returns an error if the sink fails.
    pub fn write_station_listing(&mut self, entries: &[StationEntry]) -> Result<()> {
        for entry in entries {
            let neighbors: Vec<String> = entry.neighbors.iter().map(ToString::to_string).collect();
            writeln!(
                self.writer,
                "{};{};{}",
                entry.id,
                entry.type_codes,
                neighbors.join(",")
            )?;
        }
        Ok(())
    }

    /// Writes the multi-line detail view of one container.
    ///
    /// # Errors
    /// Returns an error if the sink fails.
    pub fn write_container_detail(&mut self, container: &Container) -> Result<()> {
        self.writer.write_all(container.describe().as_bytes())?;
        Ok(())
    }

    /// Flushes the writer.
    ///
    /// # Errors
    /// Returns an error if the sink fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binnet_algorithms::StationId;
    use binnet_core::WasteType;

    #[test]
    fn test_write_container_listing() {
        let c1 = Container::new("C1", 0.0, 0.0, WasteType::Paper, 10.0).with_address("Main", "4");
        let c2 = Container::new("C2", 0.0, 0.0, WasteType::Paper, 20.5);
        let entries = vec![
            ContainerEntry {
                container: &c1,
                neighbors: vec!["C3", "C4"],
            },
            ContainerEntry {
                container: &c2,
                neighbors: Vec::new(),
            },
        ];

        let mut writer = ReportWriter::new(Vec::new());
        writer.write_container_listing(&entries).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(
            text,
            "ID: C1, Type: Paper, Capacity: 10, Address: Main, Neighbors: C3 C4\n\
             ID: C2, Type: Paper, Capacity: 20.5, Address: , Neighbors: \n"
        );
    }

    #[test]
    fn test_container_listing_keeps_capacity_text() {
        let c1 =
            Container::new("C1", 0.0, 0.0, WasteType::Paper, 120.0).with_capacity_text("120.00");
        let c2 =
            Container::new("C2", 0.0, 0.0, WasteType::Paper, 1000.0).with_capacity_text("1e3");
        let entries = vec![
            ContainerEntry {
                container: &c1,
                neighbors: Vec::new(),
            },
            ContainerEntry {
                container: &c2,
                neighbors: Vec::new(),
            },
        ];

        let mut writer = ReportWriter::new(Vec::new());
        writer.write_container_listing(&entries).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(
            text,
            "ID: C1, Type: Paper, Capacity: 120.00, Address: , Neighbors: \n\
             ID: C2, Type: Paper, Capacity: 1e3, Address: , Neighbors: \n"
        );
    }

    #[test]
    fn test_write_station_listing() {
        let entries = vec![
            StationEntry {
                id: StationId(1),
                type_codes: "PB".to_string(),
                neighbors: vec![StationId(2), StationId(10)],
            },
            StationEntry {
                id: StationId(2),
                type_codes: "T".to_string(),
                neighbors: Vec::new(),
            },
        ];

        let mut writer = ReportWriter::new(Vec::new());
        writer.write_station_listing(&entries).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(text, "1;PB;2,10\n2;T;\n");
    }

    #[test]
    fn test_write_container_detail() {
        let container = Container::new("C9", 3.0, 4.0, WasteType::Textile, 7.0);
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_container_detail(&container).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.starts_with("ID: C9\n"));
        assert!(text.ends_with("Is Public: No\n"));
    }
}
