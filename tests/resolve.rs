use ensembl_hgnc::{candidate_keys, strip_version, ReferenceColumns, ReferenceMap, SymbolMap};

fn genes() -> ReferenceMap {
    [
        ("ENSG00000141510", "TP53"),
        ("ENSG00000012048", "BRCA1"),
        ("ENSG00000139618.15", "BRCA2"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn strip_version_cuts_at_first_dot() {
    assert_eq!(strip_version("ENSG00000141510.4"), "ENSG00000141510");
    assert_eq!(strip_version("ENSG00000141510.4.1"), "ENSG00000141510");
    assert_eq!(strip_version("ENSG00000141510"), "ENSG00000141510");
    assert_eq!(strip_version(".5"), "");
}

#[test]
fn candidate_keys_exact_then_stripped() {
    let keys: Vec<&str> = candidate_keys("ENSG00000141510.4").collect();
    assert_eq!(keys, vec!["ENSG00000141510.4", "ENSG00000141510"]);

    let keys: Vec<&str> = candidate_keys("ENSG00000141510").collect();
    assert_eq!(keys, vec!["ENSG00000141510"]);
}

#[test]
fn exact_key_resolves_to_mapped_symbol() {
    let symbols = SymbolMap::from_genes(&genes());
    assert_eq!(symbols.resolve("ENSG00000141510"), "TP53");
    assert_eq!(symbols.resolve("ENSG00000012048"), "BRCA1");
}

#[test]
fn versioned_key_falls_back_to_stripped_prefix() {
    let symbols = SymbolMap::from_genes(&genes());
    assert_eq!(symbols.resolve("ENSG00000141510.4"), "TP53");
}

/// A reference key that itself carries a version is still matched verbatim.
#[test]
fn versioned_reference_key_matches_exactly() {
    let symbols = SymbolMap::from_genes(&genes());
    assert_eq!(symbols.resolve("ENSG00000139618.15"), "BRCA2");
    assert_eq!(symbols.resolve("ENSG00000139618"), "Unknown");
}

#[test]
fn missing_key_resolves_to_unknown() {
    let symbols = SymbolMap::from_genes(&genes());
    assert_eq!(symbols.resolve("ENSG99999999999"), "Unknown");
    assert_eq!(symbols.resolve("ENSG99999999999.2"), "Unknown");
    assert_eq!(symbols.resolve(""), "Unknown");
    assert_eq!(symbols.resolve_symbol("ENSG99999999999"), None);
}

#[test]
fn composed_transcript_resolves_through_gene() {
    let transcripts: ReferenceMap = [("ENST00000357654", "ENSG00000012048")]
        .into_iter()
        .collect();
    let symbols = SymbolMap::compose(&transcripts, &genes());
    assert_eq!(symbols.resolve("ENST00000357654"), "BRCA1");
    assert_eq!(symbols.resolve("ENST00000357654.9"), "BRCA1");
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols.absent_count(), 0);
}

#[test]
fn composed_transcript_without_gene_symbol_is_unknown() {
    let transcripts: ReferenceMap = [
        ("ENST00000357654", "ENSG00000012048"),
        ("ENST00000000001", "ENSG00000000999"),
    ]
    .into_iter()
    .collect();
    let symbols = SymbolMap::compose(&transcripts, &genes());
    assert_eq!(symbols.lookup("ENST00000000001"), None);
    assert_eq!(symbols.resolve("ENST00000000001"), "Unknown");
    assert_eq!(symbols.resolve("ENST00000000001.3"), "Unknown");
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols.absent_count(), 1);
}

/// The last transcript row wins even when its gene column is empty.
#[test]
fn composed_transcript_with_empty_last_gene_is_unknown() {
    let data = "Transcript stable ID\tGene stable ID\n\
                ENST00000357654\tENSG00000012048\n\
                ENST00000357654\t\n";
    let transcripts =
        ReferenceMap::from_reader(data.as_bytes(), ReferenceColumns::TRANSCRIPT_GENES)
            .expect("load");
    let symbols = SymbolMap::compose(&transcripts, &genes());
    assert_eq!(symbols.resolve("ENST00000357654"), "Unknown");
    assert_eq!(symbols.absent_count(), 1);
}

/// An absent exact entry must not block the stripped-key fallback.
#[test]
fn absent_exact_entry_still_tries_stripped_key() {
    let symbols: SymbolMap = [
        ("ENST00000000001.2", None),
        ("ENST00000000001", Some("KRAS")),
    ]
    .into_iter()
    .collect();
    assert_eq!(symbols.resolve("ENST00000000001.2"), "KRAS");
}

#[test]
fn gene_mode_does_not_resolve_transcripts() {
    let symbols = SymbolMap::from_genes(&genes());
    assert_eq!(symbols.resolve("ENST00000357654"), "Unknown");
}
