use crate::table::{column_index, tsv_reader};
use crate::types::{HashMap, HashMapExt};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Header names of the key and value columns of a reference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceColumns {
    pub key: &'static str,
    pub value: &'static str,
}

impl ReferenceColumns {
    /// HGNC export: Ensembl gene ID -> approved symbol.
    pub const GENE_SYMBOLS: Self = Self {
        key: "Ensembl Gene ID",
        value: "Approved Symbol",
    };

    /// Ensembl BioMart export: transcript stable ID -> gene stable ID.
    pub const TRANSCRIPT_GENES: Self = Self {
        key: "Transcript stable ID",
        value: "Gene stable ID",
    };
}

/// Flat identifier -> identifier/symbol table loaded from a reference file.
///
/// A key whose last row has an empty value is kept with an absent (`None`) value.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMap {
    entries: HashMap<String, Option<String>>,
}

impl ReferenceMap {
    /// Parse a tab-separated reference table with a header row.
    ///
    /// Columns other than `columns.key` and `columns.value` are ignored.
    /// A key seen more than once takes the value of its last row, even when
    /// that value is empty. Rows with an empty key are skipped.
    pub fn from_reader<R: Read>(reader: R, columns: ReferenceColumns) -> Result<Self> {
        let mut reader = tsv_reader(reader);
        let headers = reader.headers()?.clone();
        let key_idx = column_index(headers.iter(), columns.key)?;
        let value_idx = column_index(headers.iter(), columns.value)?;

        let mut entries = HashMap::new();
        for result in reader.records() {
            let record = result?;
            let key = record.get(key_idx).unwrap_or("");
            let value = record.get(value_idx).unwrap_or("");
            if key.is_empty() {
                continue;
            }
            let value = (!value.is_empty()).then(|| value.to_string());
            entries.insert(key.to_string(), value);
        }

        Ok(Self { entries })
    }

    /// Present value for `key`; `None` for a missing key or an empty value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key)?.as_deref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReferenceMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect();
        Self { entries }
    }
}

/// Load a reference file from disk. Any failure here is fatal for the run.
pub fn load_reference(path: &Path, columns: ReferenceColumns) -> Result<ReferenceMap> {
    let file = File::open(path)
        .with_context(|| format!("failed to open reference file {}", path.display()))?;
    let map = ReferenceMap::from_reader(BufReader::new(file), columns)
        .with_context(|| format!("failed to load reference file {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        key = columns.key,
        value = columns.value,
        entries = map.len(),
        "loaded reference mapping"
    );
    Ok(map)
}
