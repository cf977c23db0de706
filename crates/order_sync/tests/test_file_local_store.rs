mod common;

use chrono::NaiveDate;
use common::{order_page, patch, FakeDistributorApi};
use distributor_api::RemoteOrderStatus;
use order_sync::stores::file_local_store::{
    INCOMING_ORDERS_FILE_NAME, LAST_ORDER_DATE_FILE_NAME, ORDER_STATUS_CSV_FILE_NAME,
    UPLOAD_REQUEST_FILE_NAME,
};
use order_sync::{FileLocalStore, LocalStore, OrderRecord, RunMode, SyncEngine};
use std::fs;
use tempfile::TempDir;

const ORDER_STATUS_CSV: &str = "\
number,tradedoc_status,status,shipping_date,doc_code
ORD-1,registed,created,2024-01-03,15
ORD-2,,created,,
ORD-3,not_exists,processing,2024-01-04,-1
";

fn store_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    fs::write(dir.path().join(LAST_ORDER_DATE_FILE_NAME), "2024-01-01\n").unwrap();
    fs::write(dir.path().join(ORDER_STATUS_CSV_FILE_NAME), ORDER_STATUS_CSV).unwrap();
    fs::write(dir.path().join(UPLOAD_REQUEST_FILE_NAME), r#"{"items":[]}"#).unwrap();

    dir
}

#[test]
#[allow(non_snake_case)]
fn open__missing_directory__returns_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(FileLocalStore::open(dir.path().join("absent")).is_err());
}

#[test]
#[allow(non_snake_case)]
fn list_order_status_rows__csv_with_empty_fields__maps_them_to_absent_values() {
    let dir = store_dir();
    let store = FileLocalStore::open(dir.path()).unwrap();

    let rows = store.list_order_status_rows().unwrap();

    assert_eq!(
        rows,
        vec![
            OrderRecord::new("ORD-1")
                .with_tradedoc_status("registed")
                .with_status("created")
                .with_shipping_date("2024-01-03")
                .with_doc_code(15),
            OrderRecord::new("ORD-2").with_status("created"),
            OrderRecord::new("ORD-3")
                .with_tradedoc_status("not_exists")
                .with_status("processing")
                .with_shipping_date("2024-01-04")
                .with_doc_code(-1),
        ]
    );
}

#[test]
#[allow(non_snake_case)]
fn get_last_order_date__trailing_newline__is_normalized() {
    let dir = store_dir();
    let store = FileLocalStore::open(dir.path()).unwrap();

    assert_eq!(store.get_last_order_date().unwrap(), "2024-01-01");
}

#[test]
#[allow(non_snake_case)]
fn get_last_order_date__invalid_date__returns_error() {
    let dir = store_dir();
    fs::write(dir.path().join(LAST_ORDER_DATE_FILE_NAME), "yesterday").unwrap();
    let store = FileLocalStore::open(dir.path()).unwrap();

    assert!(store.get_last_order_date().is_err());
}

#[test]
#[allow(non_snake_case)]
fn run__download_against_file_store__writes_incoming_orders_and_updates_statuses() {
    let dir = store_dir();
    let mut store = FileLocalStore::open(dir.path()).unwrap();
    let api = FakeDistributorApi::new().with_pages(vec![order_page(1, &["A", "B"], false)]);

    let summary = SyncEngine::new(&api, &mut store, String::from("test"))
        .run(
            RunMode::Download,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap();

    assert_eq!(summary.orders_merged, 2);
    assert_eq!(summary.rows_inspected, 3);

    let incoming = fs::read_to_string(dir.path().join(INCOMING_ORDERS_FILE_NAME)).unwrap();
    let incoming: serde_json::Value = serde_json::from_str(&incoming).unwrap();
    assert_eq!(incoming["results"].as_array().unwrap().len(), 2);

    assert_eq!(
        api.status_updates(),
        vec![
            patch("ORD-1", "2024-01-03", RemoteOrderStatus::Done),
            patch("ORD-3", "2024-01-04", RemoteOrderStatus::Cancelled),
        ]
    );

    store.close().unwrap();
}

#[test]
#[allow(non_snake_case)]
fn get_upload_request__prepared_file__is_returned_verbatim() {
    let dir = store_dir();
    let store = FileLocalStore::open(dir.path()).unwrap();

    assert_eq!(store.get_upload_request().unwrap(), r#"{"items":[]}"#);
}

#[test]
#[allow(non_snake_case)]
fn close__custom_target_logger__logs_under_that_target() {
    testing_logger::setup();

    let dir = store_dir();
    let store = FileLocalStore::open(dir.path())
        .unwrap()
        .with_target_logger(String::from("nightly"));

    store.close().unwrap();

    testing_logger::validate(|captured_logs| {
        assert_eq!(captured_logs.len(), 1);
        assert_eq!(captured_logs[0].target, "nightly");
        assert!(captured_logs[0].body.contains("closed"));
    });
}
