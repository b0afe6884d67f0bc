//! ensembl-hgnc: annotate tab-separated tables of Ensembl IDs with HGNC gene symbols.
//!
//! # Library usage
//!
//! ```no_run
//! use ensembl_hgnc::{annotate, load_reference, ReferenceColumns, SymbolMap, Table};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let genes = load_reference(
//!     Path::new("HGNC_Ensembl_mapping_01_03_2018.txt"),
//!     ReferenceColumns::GENE_SYMBOLS,
//! )?;
//! let symbols = SymbolMap::from_genes(&genes);
//! assert_eq!(symbols.resolve("ENSG00000141510.4"), "TP53");
//!
//! let input = Table::read_tsv(Path::new("expression.tsv"))?;
//! let annotated = annotate(&input, &symbols, "gene_id")?;
//! annotated.table.write_tsv(Path::new("expression.tsv.hgnc_symbols"))?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod types;

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod reference;
pub mod resolve;
pub mod table;

pub use config::{output_location, ReferencePaths, RunConfig};
pub use reference::{load_reference, ReferenceColumns, ReferenceMap};
pub use resolve::{candidate_keys, strip_version, IdMode, SymbolMap};
pub use table::{annotate, Annotated, Table};
pub use types::{GENE_SYMBOL_COLUMN, OUTPUT_SUFFIX, UNKNOWN_SYMBOL};
