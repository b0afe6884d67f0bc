use crate::resolve::IdMode;
use crate::types::OUTPUT_SUFFIX;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// HGNC export with `Ensembl Gene ID` / `Approved Symbol` columns.
pub const GENE_SYMBOL_REFERENCE: &str = "HGNC_Ensembl_mapping_01_03_2018.txt";
/// Ensembl BioMart export with `Transcript stable ID` / `Gene stable ID` columns.
pub const TRANSCRIPT_GENE_REFERENCE: &str = "Ensembl_transcript_gene_mapping.txt";

/// Locations of the two reference tables, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    pub gene_symbols: PathBuf,
    pub transcript_genes: PathBuf,
}

impl ReferencePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            gene_symbols: dir.join(GENE_SYMBOL_REFERENCE),
            transcript_genes: dir.join(TRANSCRIPT_GENE_REFERENCE),
        }
    }

    /// Default references, shipped next to the installed binary.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("failed to locate the running executable")?;
        let dir = exe
            .parent()
            .ok_or_else(|| anyhow!("executable path has no parent: {}", exe.display()))?;
        Ok(Self::in_dir(dir))
    }

    pub fn with_overrides(
        mut self,
        gene_symbols: Option<PathBuf>,
        transcript_genes: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = gene_symbols {
            self.gene_symbols = path;
        }
        if let Some(path) = transcript_genes {
            self.transcript_genes = path;
        }
        self
    }
}

/// Everything one annotation run needs, resolved before any file is opened.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub id_column: String,
    pub mode: IdMode,
    pub output: PathBuf,
    pub references: ReferencePaths,
}

/// `<dir>/<input file name>.hgnc_symbols`, where `dir` is `output_dir` when given
/// and the input's own directory otherwise.
pub fn output_location(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| anyhow!("input path has no file name: {}", input.display()))?;
    let mut file_name = name.to_os_string();
    file_name.push(".");
    file_name.push(OUTPUT_SUFFIX);

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(file_name))
}
