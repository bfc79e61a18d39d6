//! Input Loading Integration Tests
//!
//! Tests for reading page lists and form-feed text from disk and feeding
//! them through the extractor.

use cablegraph::ingest::{load_document, LoadError};
use cablegraph::{extract_documents, EdgeTag, ExtractOptions};
use tempfile::TempDir;
use tokio::fs;

#[tokio::test]
async fn test_load_json_page_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bridge.json");
    fs::write(
        &path,
        r#"[
            {"pageNumber": 1, "text": "RACK-2\nN50-001-03-07 CAT6"},
            {"pageNumber": 2, "text": null},
            {"pageNumber": 3, "text": "N50-001-03-07 CAT6\nSWITCH-5"}
        ]"#,
    )
    .await
    .unwrap();

    let doc = load_document(&path).await.unwrap();
    assert_eq!(doc.name, "bridge.json");
    assert_eq!(doc.pages.len(), 3);
    assert_eq!(doc.pages[1].text, "");

    let result = extract_documents(&[doc], ExtractOptions::default());
    assert_eq!(result.edges.len(), 1);
    assert_eq!(result.edges[0].page_refs, vec![1, 3]);
    assert_eq!(result.edges[0].tag, EdgeTag::SystemLevel);
}

#[tokio::test]
async fn test_load_form_feed_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("engine.txt");
    fs::write(&path, "RACK-2\nN50-001-03-07 LAN\x0cN50-001-03-07 LAN\nRACK-2\x0c")
        .await
        .unwrap();

    let doc = load_document(&path).await.unwrap();
    assert_eq!(doc.pages.len(), 2);
    assert_eq!(doc.pages[1].page_number, 2);

    let result = extract_documents(&[doc], ExtractOptions::default());
    assert_eq!(result.edges.len(), 1);
    assert_eq!(result.edges[0].tag, EdgeTag::Internal);
}

#[tokio::test]
async fn test_documents_pair_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("deck-1.txt");
    let second = temp_dir.path().join("deck-2.json");
    fs::write(&first, "VSAT-1 modem\nA01-001-15-02 CAT5e").await.unwrap();
    fs::write(
        &second,
        r#"{"name": "Deck 2", "pages": [{"pageNumber": 9, "text": "A01-001-15-02\nROUTER-3"}]}"#,
    )
    .await
    .unwrap();

    let docs = vec![
        load_document(&first).await.unwrap(),
        load_document(&second).await.unwrap(),
    ];
    assert_eq!(docs[1].name, "Deck 2");

    let result = extract_documents(&docs, ExtractOptions::default());
    assert_eq!(result.edges.len(), 1);
    assert_eq!(result.edges[0].media, "CAT5e");
    assert_eq!(result.edges[0].page_refs, vec![1, 9]);
}

#[tokio::test]
async fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let result = load_document(&path).await;
    match result {
        Err(LoadError::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected read error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "[{\"pageNumber\": 1,").await.unwrap();

    let result = load_document(&path).await;
    assert!(matches!(result, Err(LoadError::Parse { .. })));
}
