use log::debug;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::WriterError;
use crate::table::Table;

/// Writes tables as tab-separated text
pub struct TsvWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> TsvWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(writer);
        Self { inner }
    }

    /// Write the header line followed by one line per row
    ///
    /// The table is checked in full before anything is written.
    pub fn write_table(&mut self, table: &Table) -> Result<(), WriterError> {
        check_table(table)?;

        self.write_record(&table.header)?;
        for row in &table.rows {
            self.write_record(row)?;
        }
        self.inner.flush()?;
        Ok(())
    }

    fn write_record(&mut self, record: &[String]) -> Result<(), WriterError> {
        // csv quotes a lone empty field as `""`; an empty line is the unquoted form.
        if let [field] = record {
            if field.is_empty() {
                self.inner.flush()?;
                self.inner.get_mut().write_all(b"\n")?;
                return Ok(());
            }
        }
        self.inner.write_record(record)?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W, WriterError> {
        self.inner
            .into_inner()
            .map_err(|e| WriterError::IoError(e.into_error()))
    }
}

fn check_table(table: &Table) -> Result<(), WriterError> {
    let width = table.width();
    if width == 0 {
        return Err(WriterError::EmptyHeader);
    }

    for label in &table.header {
        check_field(label, label)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        if row.len() != width {
            return Err(WriterError::RowWidthMismatch {
                row: index,
                expected: width,
                found: row.len(),
            });
        }
        for (label, value) in table.header.iter().zip(row) {
            check_field(label, value)?;
        }
    }

    Ok(())
}

fn check_field(column: &str, value: &str) -> Result<(), WriterError> {
    if value.contains(['\t', '\n', '\r']) {
        return Err(WriterError::UnrepresentableField {
            column: column.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Render a table as tab-separated text
pub fn table_to_string(table: &Table) -> Result<String, WriterError> {
    let mut writer = TsvWriter::new(Vec::new());
    writer.write_table(table)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes)
        .map_err(|e| WriterError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write bytes to `path` through a temporary file in the same directory
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), WriterError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| WriterError::IoError(e.error))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Write a table to a file as tab-separated text
pub fn write_table_file<P: AsRef<Path>>(path: P, table: &Table) -> Result<(), WriterError> {
    let contents = table_to_string(table)?;
    write_atomically(path.as_ref(), contents.as_bytes())
}
