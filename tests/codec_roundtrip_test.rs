//! Persistence round-trip tests across all three index formats.

use dualrank::{
    load_index, save_index, EngineError, IndexBuilder, IndexFormat, InvertedIndex, Section,
    Document,
};

fn toks(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn sample_index() -> InvertedIndex {
    let docs = vec![
        Document::new(0, "zero", toks(&["scam", "scam", "ring"])),
        Document::new(1, "one", toks(&["ring", "raid"])),
        Document::new(2, "two", toks(&["scam", "victim", "victim"])),
        Document::new(7, "seven", toks(&["raid"])),
    ];
    IndexBuilder::new().build(&docs).unwrap()
}

fn assert_equivalent(loaded: &InvertedIndex, original: &InvertedIndex, avg_epsilon: f64) {
    assert_eq!(loaded.num_docs(), original.num_docs());
    assert_eq!(loaded.doc_lengths(), original.doc_lengths());
    assert_eq!(loaded.num_unique_terms(), original.num_unique_terms());
    for (term, posting) in original.postings() {
        assert_eq!(loaded.posting(term), Some(posting), "posting mismatch for '{term}'");
    }
    assert!(
        (loaded.avg_doc_length() - original.avg_doc_length()).abs() < avg_epsilon,
        "avg_doc_length drifted: {} vs {}",
        loaded.avg_doc_length(),
        original.avg_doc_length()
    );
}

#[test]
fn binary_round_trip_is_lossless() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.bin");
    let index = sample_index();

    save_index(&index, &path, IndexFormat::Binary)?;
    let loaded = load_index(&path, IndexFormat::Binary)?;
    assert_eq!(loaded, index);
    Ok(())
}

#[test]
fn structured_round_trip_is_lossless_after_key_coercion() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.json");
    let index = sample_index();

    save_index(&index, &path, IndexFormat::Structured)?;
    let loaded = load_index(&path, IndexFormat::Structured)?;
    assert_eq!(loaded, index);
    Ok(())
}

#[test]
fn text_round_trip_up_to_average_rounding() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.txt");
    let index = sample_index();

    save_index(&index, &path, IndexFormat::Text)?;
    let loaded = load_index(&path, IndexFormat::Text)?;
    // The text format writes the average with two decimals.
    assert_equivalent(&loaded, &index, 0.005);
    Ok(())
}

#[test]
fn all_formats_round_trip_an_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let index = InvertedIndex::new();

    for format in [IndexFormat::Binary, IndexFormat::Text, IndexFormat::Structured] {
        let path = dir.path().join(format!("empty.{format}"));
        save_index(&index, &path, format).unwrap();
        let loaded = load_index(&path, format).unwrap();
        assert!(loaded.is_empty(), "{format} format broke the empty index");
        assert_eq!(loaded.avg_doc_length(), 0.0);
    }
}

#[test]
fn text_and_structured_agree_with_binary() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let index = sample_index();

    let bin = dir.path().join("i.bin");
    let txt = dir.path().join("i.txt");
    let json = dir.path().join("i.json");
    save_index(&index, &bin, IndexFormat::Binary)?;
    save_index(&index, &txt, IndexFormat::Text)?;
    save_index(&index, &json, IndexFormat::Structured)?;

    let from_bin = load_index(&bin, IndexFormat::Binary)?;
    let from_txt = load_index(&txt, IndexFormat::Text)?;
    let from_json = load_index(&json, IndexFormat::Structured)?;

    assert_equivalent(&from_txt, &from_bin, 0.005);
    assert_eq!(from_json, from_bin);
    Ok(())
}

#[test]
fn corrupt_binary_reports_index_body() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.bin");
    std::fs::write(&path, b"\x00\x01garbage").unwrap();

    let err = load_index(&path, IndexFormat::Binary).unwrap_err();
    assert!(matches!(
        err,
        EngineError::CorruptIndex {
            section: Section::IndexBody,
            ..
        }
    ));
}

#[test]
fn corrupt_text_header_is_located() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.txt");
    let index = sample_index();
    save_index(&index, &path, IndexFormat::Text).unwrap();

    let text = std::fs::read_to_string(&path)
        .unwrap()
        .replace("Average Document Length: 2.25 tokens", "Average Document Length: soon tokens");
    std::fs::write(&path, text).unwrap();

    let err = load_index(&path, IndexFormat::Text).unwrap_err();
    match err {
        EngineError::CorruptIndex { section, .. } => assert_eq!(section, Section::Header),
        other => panic!("expected corruption error, got {other:?}"),
    }
}

#[test]
fn corrupt_structured_lengths_are_located() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    let index = sample_index();
    save_index(&index, &path, IndexFormat::Structured).unwrap();

    let json = std::fs::read_to_string(&path)
        .unwrap()
        .replace("\"doc_lengths\"", "\"doc_lenghts\"");
    std::fs::write(&path, json).unwrap();

    let err = load_index(&path, IndexFormat::Structured).unwrap_err();
    match err {
        EngineError::CorruptIndex { section, .. } => assert_eq!(section, Section::DocLengths),
        other => panic!("expected corruption error, got {other:?}"),
    }
}

#[test]
fn unknown_format_tag_is_rejected() {
    let err = "parquet".parse::<IndexFormat>().unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedFormat(name) if name == "parquet"));
}

#[test]
fn queries_are_identical_across_persisted_formats() {
    use dualrank::{Bm25, QueryEngine};

    let dir = tempfile::tempdir().unwrap();
    let index = sample_index();
    let query = toks(&["scam", "raid"]);

    let expected = QueryEngine::new(&index).search(&query, 10, &Bm25::new());
    assert!(!expected.is_empty());

    for format in [IndexFormat::Binary, IndexFormat::Text, IndexFormat::Structured] {
        let path = dir.path().join(format!("q.{format}"));
        save_index(&index, &path, format).unwrap();
        let loaded = load_index(&path, format).unwrap();
        let ranked = QueryEngine::new(&loaded).search(&query, 10, &Bm25::new());

        let expected_ids: Vec<_> = expected.iter().map(|&(id, _)| id).collect();
        let ranked_ids: Vec<_> = ranked.iter().map(|&(id, _)| id).collect();
        assert_eq!(ranked_ids, expected_ids, "{format} format changed the ranking");
        for (a, b) in expected.iter().zip(&ranked) {
            assert!((a.1 - b.1).abs() < 1e-6, "{format} format changed a score");
        }
    }
}
