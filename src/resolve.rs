//! Ensembl identifier -> HGNC symbol resolution.
//!
//! A [`SymbolMap`] is the single table consulted per input row. In gene mode it is
//! the HGNC reference as-is; in transcript mode it is the transcript -> gene table
//! composed with the HGNC reference, where a transcript whose gene has no symbol
//! keeps an explicit `None`.

use crate::reference::ReferenceMap;
use crate::types::{HashMap, UNKNOWN_SYMBOL};

/// Which kind of Ensembl identifier the input column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMode {
    /// ENSG accessions, resolved directly through the HGNC reference.
    Gene,
    /// ENST accessions, resolved through transcript -> gene -> symbol.
    Transcript,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolMap {
    symbols: HashMap<String, Option<String>>,
}

impl SymbolMap {
    /// Gene mode: every ENSG key maps to its approved symbol, absent when the
    /// reference left it empty.
    pub fn from_genes(genes: &ReferenceMap) -> Self {
        genes.iter().collect()
    }

    /// Transcript mode: ENST -> ENSG -> symbol. The intermediate gene is looked up
    /// exactly; an empty gene or a gene without a symbol leaves the transcript's
    /// entry absent.
    pub fn compose(transcripts: &ReferenceMap, genes: &ReferenceMap) -> Self {
        transcripts
            .iter()
            .map(|(enst, ensg)| (enst, ensg.and_then(|ensg| genes.get(ensg))))
            .collect()
    }

    /// Present symbol stored under exactly `key`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.symbols.get(key)?.as_deref()
    }

    /// First present symbol along the candidate keys of `id`.
    pub fn resolve_symbol(&self, id: &str) -> Option<&str> {
        candidate_keys(id).find_map(|key| self.lookup(key))
    }

    /// Like [`resolve_symbol`](Self::resolve_symbol), falling back to `"Unknown"`.
    pub fn resolve(&self, id: &str) -> &str {
        self.resolve_symbol(id).unwrap_or(UNKNOWN_SYMBOL)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of keys whose symbol is explicitly absent.
    pub fn absent_count(&self) -> usize {
        self.symbols.values().filter(|s| s.is_none()).count()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for SymbolMap {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let symbols = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.map(Into::into)))
            .collect();
        Self { symbols }
    }
}

/// Keys tried for `id`, in order: the identifier verbatim, then with its
/// version suffix removed (only when that differs).
pub fn candidate_keys<'a>(id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let stripped = strip_version(id);
    std::iter::once(id).chain((stripped != id).then_some(stripped))
}

/// Text before the first `.`, e.g. `ENSG00000141510.4` -> `ENSG00000141510`.
pub fn strip_version(id: &str) -> &str {
    id.split_once('.').map_or(id, |(base, _)| base)
}
