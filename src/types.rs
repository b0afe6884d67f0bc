// Fast hash maps using AHash instead of the default SipHash.
// Import with `use crate::types::HashMap` (plus `HashMapExt` for `::new()`).
pub(crate) type HashMap<K, V> = ahash::HashMap<K, V>;
pub(crate) use ahash::HashMapExt;

/// Header of the column appended to every output table.
pub const GENE_SYMBOL_COLUMN: &str = "Gene Symbol";

/// Symbol written for identifiers that resolve to nothing.
pub const UNKNOWN_SYMBOL: &str = "Unknown";

/// Suffix appended to the input file name to form the output file name.
pub const OUTPUT_SUFFIX: &str = "hgnc_symbols";
