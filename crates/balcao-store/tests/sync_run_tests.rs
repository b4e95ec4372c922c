//! End-to-end sync run tests
//!
//! Exercise the whole pipeline: batch parse, one transaction over applier +
//! ingestor, commit, then export.

use balcao_core::SyncBatch;
use balcao_store::export::export_snapshot;
use balcao_store::{migrations, run_sync};
use rusqlite::Connection;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn setup_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_end_to_end_ana_scenario() {
    let mut conn = setup_db();
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("dados_offline.json");

    let payload = r#"{
        "changes": [
            {"action": "create_user",
             "details": {"username": "ana", "password": "h", "role": "admin"}}
        ],
        "sales": [
            {"timestamp": "t1", "vendedor": "ana", "produtos": "[]",
             "formas_pagamento": "[]", "valores_pagos": "[]", "total": 10}
        ]
    }"#;

    let batch = SyncBatch::parse(payload).unwrap();
    let report = run_sync(&mut conn, &batch).unwrap();
    assert_eq!(report.users_created, 1);
    assert_eq!(report.sales_inserted, 1);
    assert_eq!(report.skipped(), 0);

    export_snapshot(&conn, &snapshot_path).unwrap();

    let doc: Value = serde_json::from_str(&fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    assert_eq!(doc["users"].as_array().unwrap().len(), 1);
    assert_eq!(doc["users"][0]["username"], "ana");
    assert_eq!(doc["vendas_log"].as_array().unwrap().len(), 1);
    assert_eq!(doc["vendas_log"][0]["valor_total"], 10.0);
}

#[test]
fn test_running_full_batch_twice_changes_nothing() {
    let mut conn = setup_db();
    conn.execute(
        "INSERT INTO products (cod, barcode, stock) VALUES ('P1', NULL, 2)",
        [],
    )
    .unwrap();

    let payload = r#"{
        "changes": [
            {"action": "create_user",
             "details": {"username": "ana", "password": "h", "role": "admin"}},
            {"action": "pair_product",
             "details": {"cod": "P1", "newBarcode": "555"}}
        ],
        "sales": [
            {"timestamp": "t1", "vendedor": "ana", "total": 10},
            {"timestamp": "t2", "vendedor": "ana", "total": 20},
            {"timestamp": "t3", "vendedor": "rui", "total": 30}
        ]
    }"#;
    let batch = SyncBatch::parse(payload).unwrap();

    run_sync(&mut conn, &batch).unwrap();
    let second = run_sync(&mut conn, &batch).unwrap();

    assert_eq!(second.users_created, 0);
    assert_eq!(second.sales_inserted, 0);
    assert_eq!(second.sales_duplicate, 3);

    let sales: i64 = conn
        .query_row("SELECT COUNT(*) FROM vendas_log", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sales, 3);

    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 1);
}

#[test]
fn test_empty_batch_commits_and_reports_zeroes() {
    let mut conn = setup_db();
    let batch = SyncBatch::parse("{}").unwrap();

    let report = run_sync(&mut conn, &batch).unwrap();
    assert_eq!(report.users_created, 0);
    assert_eq!(report.sales_inserted, 0);
}

#[test]
fn test_mixed_batch_applies_valid_and_counts_skips() {
    let mut conn = setup_db();
    let payload = r#"{
        "changes": [
            {"action": "future_action", "details": {"whatever": true}},
            {"action": "create_user", "details": {"username": "bea"}},
            {"action": "create_user",
             "details": {"username": "bea", "password": "h", "role": "caixa"}}
        ],
        "sales": [
            {"vendedor": "bea", "total": 5},
            {"timestamp": "t9", "vendedor": "bea", "total": 5}
        ]
    }"#;
    let batch = SyncBatch::parse(payload).unwrap();

    let report = run_sync(&mut conn, &batch).unwrap();
    assert_eq!(report.changes_unknown, 1);
    assert_eq!(report.changes_malformed, 1);
    assert_eq!(report.users_created, 1);
    assert_eq!(report.sales_malformed, 1);
    assert_eq!(report.sales_inserted, 1);
}

#[test]
fn test_store_failure_rolls_back_whole_transaction() {
    let mut conn = setup_db();
    // Drop the sales log so the ingestor hits a hard store-level failure
    // after the applier has already inserted a user within the transaction.
    conn.execute("DROP TABLE vendas_log", []).unwrap();

    let payload = r#"{
        "changes": [
            {"action": "create_user",
             "details": {"username": "ana", "password": "h", "role": "admin"}}
        ],
        "sales": [
            {"timestamp": "t1", "vendedor": "ana", "total": 10}
        ]
    }"#;
    let batch = SyncBatch::parse(payload).unwrap();

    let err = run_sync(&mut conn, &batch).unwrap_err();
    assert_eq!(err.code(), "ERR_PERSISTENCE");

    // The user insert from the same transaction must not have persisted
    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 0);
}
