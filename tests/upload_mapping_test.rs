use prb_cli::ingest::mapping::{ColumnMapping, NormalizedRecord, normalize};
use prb_cli::ingest::spreadsheet::{decode, load_dataset};
use serde_json::json;

#[test]
fn test_spreadsheet_round_trip() {
    let dataset = decode(b"Phone,Src\n123,A\n456,B\n").unwrap();
    assert_eq!(dataset.headers, vec!["Phone", "Src"]);

    let mapping = ColumnMapping {
        contact_column: "Phone".to_string(),
        source_column: "Src".to_string(),
    };

    let records = normalize(&dataset, &mapping).unwrap();
    assert_eq!(
        records,
        vec![
            NormalizedRecord {
                contact_number: "123".to_string(),
                source_name: "A".to_string(),
            },
            NormalizedRecord {
                contact_number: "456".to_string(),
                source_name: "B".to_string(),
            },
        ]
    );
}

#[test]
fn test_upload_payload_shape() {
    let dataset = decode(b"Phone,Src\n123,A\n").unwrap();
    let mapping = ColumnMapping {
        contact_column: "Phone".to_string(),
        source_column: "Src".to_string(),
    };
    let records = normalize(&dataset, &mapping).unwrap();

    let payload = json!({ "records": records });
    assert_eq!(
        payload,
        json!({ "records": [ { "contact_number": "123", "source_name": "A" } ] })
    );
}

#[test]
fn test_unknown_column_fails_before_dispatch() {
    let dataset = decode(b"Phone,Src\n123,A\n").unwrap();
    let mapping = ColumnMapping {
        contact_column: "Phone".to_string(),
        source_column: "Source".to_string(),
    };

    let err = normalize(&dataset, &mapping).unwrap_err();
    assert!(err.to_string().contains("Source"));
}

#[tokio::test]
async fn test_unreadable_file_yields_empty_dataset() {
    let path = std::env::temp_dir().join("prb-cli-no-such-upload.csv");
    let dataset = load_dataset(&path).await;
    assert!(dataset.is_empty());
}

#[tokio::test]
async fn test_csv_file_load() {
    let path = std::env::temp_dir().join("prb-cli-upload-test.csv");
    std::fs::write(&path, "Phone,Src\n123,A\n456,B\n").unwrap();

    let dataset = load_dataset(&path).await;
    std::fs::remove_file(&path).ok();

    assert_eq!(dataset.headers, vec!["Phone", "Src"]);
    assert_eq!(dataset.row_count(), 2);
}
