use crate::config::{output_location, ReferencePaths, RunConfig};
use crate::resolve::IdMode;
use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ensembl-hgnc",
    about = "Translate Ensembl IDs to HGNC symbols",
    version
)]
#[command(group(
    ArgGroup::new("id_header")
        .required(true)
        .multiple(false)
        .args(["ensg_header", "enst_header"])
))]
pub struct Args {
    /// Tab-separated file containing a column of Ensembl IDs
    pub input_file: PathBuf,

    /// Header of the column holding Ensembl gene IDs (ENSG)
    #[arg(long = "ensg_header", value_name = "HEADER")]
    pub ensg_header: Option<String>,

    /// Header of the column holding Ensembl transcript IDs (ENST)
    #[arg(long = "enst_header", value_name = "HEADER")]
    pub enst_header: Option<String>,

    /// Output directory (defaults to the input file's directory)
    #[arg(long = "output_path", value_name = "DIR")]
    pub output_path: Option<PathBuf>,

    /// HGNC reference (Ensembl Gene ID / Approved Symbol)
    #[arg(long = "hgnc_reference", value_name = "FILE")]
    pub hgnc_reference: Option<PathBuf>,

    /// Transcript reference (Transcript stable ID / Gene stable ID)
    #[arg(long = "transcript_reference", value_name = "FILE")]
    pub transcript_reference: Option<PathBuf>,

    /// Set logging level to WARN
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Args {
    /// Mode and identifier column selected by the header flags.
    pub fn id_selection(&self) -> Result<(IdMode, &str)> {
        match (&self.ensg_header, &self.enst_header) {
            (Some(header), None) => Ok((IdMode::Gene, header.as_str())),
            (None, Some(header)) => Ok((IdMode::Transcript, header.as_str())),
            (Some(_), Some(_)) => bail!("only one of --ensg_header or --enst_header may be given"),
            (None, None) => bail!("one of --ensg_header or --enst_header is required"),
        }
    }

    pub fn run_config(&self) -> Result<RunConfig> {
        let (mode, id_column) = self.id_selection()?;
        let references = ReferencePaths::beside_executable()?.with_overrides(
            self.hgnc_reference.clone(),
            self.transcript_reference.clone(),
        );
        let output = output_location(&self.input_file, self.output_path.as_deref())?;
        Ok(RunConfig {
            input: self.input_file.clone(),
            id_column: id_column.to_string(),
            mode,
            output,
            references,
        })
    }
}
