use crate::config::{ReferencePaths, RunConfig};
use crate::reference::{load_reference, ReferenceColumns};
use crate::resolve::{IdMode, SymbolMap};
use crate::table::{annotate, Table};
use anyhow::Result;

#[derive(Debug, Default)]
pub struct Stats {
    pub rows: u64,
    pub resolved: u64,
    pub unknown: u64,
}

/// Load the references needed for `mode` and build the table consulted per row.
pub fn build_symbol_map(mode: IdMode, references: &ReferencePaths) -> Result<SymbolMap> {
    let genes = load_reference(&references.gene_symbols, ReferenceColumns::GENE_SYMBOLS)?;
    match mode {
        IdMode::Gene => Ok(SymbolMap::from_genes(&genes)),
        IdMode::Transcript => {
            let transcripts =
                load_reference(&references.transcript_genes, ReferenceColumns::TRANSCRIPT_GENES)?;
            let symbols = SymbolMap::compose(&transcripts, &genes);
            tracing::info!(
                transcripts = symbols.len(),
                without_symbol = symbols.absent_count(),
                "composed transcript -> symbol mapping"
            );
            Ok(symbols)
        }
    }
}

/// Run one annotation: references, then input, then a single write of the output.
pub fn run(config: &RunConfig) -> Result<Stats> {
    let symbols = build_symbol_map(config.mode, &config.references)?;
    let input = Table::read_tsv(&config.input)?;
    let annotated = annotate(&input, &symbols, &config.id_column)?;
    annotated.table.write_tsv(&config.output)?;

    Ok(Stats {
        rows: annotated.table.rows.len() as u64,
        resolved: annotated.resolved as u64,
        unknown: annotated.unknown as u64,
    })
}
