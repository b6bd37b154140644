use writerdesk::catalog::provider::parse_catalog_json;
use writerdesk::catalog::{CatalogError, CatalogProvider, Category, FileCatalog, Format, SampleCatalog};

const VALID: &str = r#"[
  {
    "id": "a",
    "title": "Layer Two",
    "author": "Jane Doe",
    "price": 12.5,
    "originalPrice": 15.0,
    "rating": 3.5,
    "reviewCount": 10,
    "description": "Payment channels explained.",
    "category": "technical",
    "publishedDate": "2021-06-01",
    "pages": 200,
    "format": "paperback",
    "previewUrl": "https://example.com/preview/a",
    "tags": ["lightning"]
  },
  {
    "id": "b",
    "title": "Cold Storage",
    "author": "John Roe",
    "price": 0,
    "rating": 5,
    "category": "security",
    "publishedDate": "2020-01-31",
    "format": "ebook"
  }
]"#;

#[test]
fn test_sample_catalog_has_six_valid_items() {
    let items = SampleCatalog::items().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[3].category, Category::Philosophy);
    assert_eq!(items[3].format, Format::Audiobook);
    assert_eq!(items[0].published.to_string(), "2018-03-23");
}

#[tokio::test]
async fn test_sample_provider_lists_items() {
    let provider = SampleCatalog;
    assert_eq!(provider.source_name(), "sample");
    assert_eq!(provider.list_items().await.unwrap().len(), 6);
}

#[test]
fn test_parse_catalog_json_in_camel_case() {
    let items = parse_catalog_json(VALID).unwrap();
    assert_eq!(items.len(), 2);

    let first = &items[0];
    assert_eq!(first.original_price, Some(15.0));
    assert_eq!(first.review_count, 10);
    assert_eq!(first.preview_url.as_deref(), Some("https://example.com/preview/a"));
    assert_eq!(first.star_counts(), (3, 1, 1));

    let second = &items[1];
    assert!(second.tags.is_empty());
    assert!(!second.featured);
    assert_eq!(second.category, Category::Security);
}

#[test]
fn test_invalid_date_is_a_load_error() {
    let content = VALID.replace("2021-06-01", "June 2021");
    match parse_catalog_json(&content) {
        Err(CatalogError::InvalidDate { id, value }) => {
            assert_eq!(id, "a");
            assert_eq!(value, "June 2021");
        }
        other => panic!("expected an invalid date error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let content = VALID.replace("\"id\": \"b\"", "\"id\": \"a\"");
    assert!(matches!(parse_catalog_json(&content), Err(CatalogError::DuplicateId(id)) if id == "a"));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let rating = VALID.replace("\"rating\": 5", "\"rating\": 7");
    assert!(matches!(parse_catalog_json(&rating), Err(CatalogError::InvalidItem { .. })));

    let price = VALID.replace("\"price\": 0", "\"price\": -1");
    assert!(matches!(parse_catalog_json(&price), Err(CatalogError::InvalidItem { .. })));

    let category = VALID.replace("\"security\"", "\"cooking\"");
    assert!(matches!(
        parse_catalog_json(&category),
        Err(CatalogError::UnknownVariant { kind: "category", .. })
    ));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(parse_catalog_json("{not json"), Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_file_catalog_reads_json() {
    let dir = std::env::temp_dir().join("writerdesk_test_file_catalog");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalog.json");
    std::fs::write(&path, VALID).unwrap();

    let provider = FileCatalog::new(&path);
    assert_eq!(provider.source_name(), "file");
    let items = provider.list_items().await.unwrap();
    assert_eq!(items.len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_file_catalog_missing_file() {
    let provider = FileCatalog::new("/nonexistent/writerdesk/catalog.json");
    assert!(matches!(provider.list_items().await, Err(CatalogError::Io(_))));
}
