//! Fixed-width delimited tables.
//!
//! A table is an ordered list of rows, each holding exactly the expected
//! number of raw text fields. Fields are split on a single delimiter byte
//! with no quoting. Empty fields are kept, so a line ending in the
//! delimiter has a trailing empty field. Every line is a row: a blank line
//! is a row with one empty field.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Options controlling how delimited files are read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadOptions {
    /// Field separator, a single ASCII byte.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    /// Creates options with the default `,` delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Rows of raw text fields, all of the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: usize,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Loads a table from a file.
    ///
    /// Either every line parses into exactly `columns` fields or nothing
    /// is returned.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the file cannot be opened, [`Error::Read`]
    /// if it cannot be read and [`Error::ColumnCount`] for a row of the
    /// wrong width.
    pub fn load<P: AsRef<Path>>(path: P, columns: usize, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, path, columns, options)?;
        log::debug!(
            "loaded {} rows of {} fields from {}",
            table.len(),
            columns,
            path.display()
        );
        Ok(table)
    }

    /// Reads a table from any reader.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    /// Same as [`Table::load`], minus the open failure.
    pub fn from_reader<R: Read>(
        mut reader: R,
        origin: &Path,
        columns: usize,
        options: &LoadOptions,
    ) -> Result<Self> {
        let read_error = |source: csv::Error| Error::Read {
            path: origin.to_path_buf(),
            source,
        };

        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|err| read_error(err.into()))?;

        // Only `\n` ends a record; a `\r` before it is stripped below.
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .delimiter(options.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .from_reader(data.as_slice());

        let mut table = Self {
            columns,
            rows: Vec::new(),
        };
        let mut record = StringRecord::new();
        let mut offset = 0;

        while rdr.read_record(&mut record).map_err(read_error)? {
            // The reader skips blank lines; they sit in front of the record.
            for _ in 0..count_blank_lines(&data, offset) {
                table.push_row(origin, vec![String::new()])?;
            }

            let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
            if let Some(last) = fields.last_mut() {
                if last.ends_with('\r') {
                    last.pop();
                }
            }
            table.push_row(origin, fields)?;

            offset = usize::try_from(rdr.position().byte()).unwrap_or(data.len());
        }

        for _ in 0..count_blank_lines(&data, offset) {
            table.push_row(origin, vec![String::new()])?;
        }

        Ok(table)
    }

    fn push_row(&mut self, origin: &Path, fields: Vec<String>) -> Result<()> {
        if fields.len() != self.columns {
            return Err(Error::ColumnCount {
                path: origin.to_path_buf(),
                line: self.rows.len() + 1,
                expected: self.columns,
                found: fields.len(),
            });
        }
        self.rows.push(fields);
        Ok(())
    }

    /// Number of fields per row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`, if any.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns one field of one row, if both exist.
    #[must_use]
    pub fn field(&self, row: usize, column: usize) -> Option<&str> {
        self.row(row)?.get(column).map(String::as_str)
    }

    /// Iterates over the rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Number of empty lines starting at byte `offset`.
fn count_blank_lines(data: &[u8], offset: usize) -> usize {
    data.get(offset..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&byte| byte == b'\n')
        .count()
}
