use crate::resolve::SymbolMap;
use crate::types::{GENE_SYMBOL_COLUMN, UNKNOWN_SYMBOL};
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Tab-separated reader with a header row; every row must have the header's width.
pub(crate) fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(false)
        .from_reader(reader)
}

pub(crate) fn column_index<'a>(
    mut headers: impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<usize> {
    headers
        .position(|h| h == name)
        .ok_or_else(|| anyhow!("missing column {:?} in header", name))
}

/// An in-memory tab-separated table: a header row plus string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = tsv_reader(reader);
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    pub fn read_tsv(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open input table {}", path.display()))?;
        let table = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse input table {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "loaded input table"
        );
        Ok(table)
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        column_index(self.headers.iter().map(String::as_str), name)
    }

    /// Render the whole table, header first, as tab-separated bytes.
    pub fn to_tsv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| anyhow!("failed to flush table: {}", e.error()))
    }

    /// Rendered in memory first, so a failure never leaves a partial file behind.
    pub fn write_tsv(&self, path: &Path) -> Result<()> {
        let bytes = self.to_tsv_bytes()?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write output table {}", path.display()))
    }
}

/// Result of [`annotate`]: the augmented table plus resolution counts.
#[derive(Debug, Clone)]
pub struct Annotated {
    pub table: Table,
    pub resolved: usize,
    pub unknown: usize,
}

/// Append a `Gene Symbol` column resolved from `id_column`, row by row.
///
/// An input that already carries a `Gene Symbol` column has that column
/// overwritten in place instead of gaining a second one.
pub fn annotate(input: &Table, symbols: &SymbolMap, id_column: &str) -> Result<Annotated> {
    let id_idx = input.column_index(id_column)?;
    let existing = input.headers.iter().position(|h| h == GENE_SYMBOL_COLUMN);

    let mut headers = input.headers.clone();
    if existing.is_none() {
        headers.push(GENE_SYMBOL_COLUMN.to_string());
    } else {
        tracing::warn!("input already has a {:?} column; overwriting it", GENE_SYMBOL_COLUMN);
    }

    let mut resolved = 0;
    let mut unknown = 0;
    let mut rows = Vec::with_capacity(input.rows.len());
    for row in &input.rows {
        let id = row.get(id_idx).map(String::as_str).unwrap_or("");
        let symbol = match symbols.resolve_symbol(id) {
            Some(symbol) => {
                resolved += 1;
                symbol
            }
            None => {
                unknown += 1;
                tracing::debug!(id, "no symbol found");
                UNKNOWN_SYMBOL
            }
        };

        let mut out = row.clone();
        match existing {
            Some(idx) if idx < out.len() => out[idx] = symbol.to_string(),
            _ => out.push(symbol.to_string()),
        }
        rows.push(out);
    }

    Ok(Annotated {
        table: Table { headers, rows },
        resolved,
        unknown,
    })
}
