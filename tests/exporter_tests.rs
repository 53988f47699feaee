// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use moneylite::commands::{exporter, expenses::create_expense_at, incomes::create_income_at};
use moneylite::models::{ParsedExpense, ParsedIncome};
use moneylite::{cli, db};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn run_export(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["moneylite", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_expenses_pretty_json_oldest_first() {
    let conn = base_conn();
    let e = |item: &str, price| ParsedExpense {
        item: item.into(),
        price,
        category: "食費".into(),
    };
    create_expense_at(&conn, &e("パン", 300), at("2025-01-02 08:00:00")).unwrap();
    create_expense_at(&conn, &e("弁当", 550), at("2025-01-03 12:00:00")).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, &["expenses", "--format", "json", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"id": 1, "created_at": "2025-01-02 08:00:00", "item": "パン", "price": 300, "category": "食費"},
            {"id": 2, "created_at": "2025-01-03 12:00:00", "item": "弁当", "price": 550, "category": "食費"}
        ])
    );
}

#[test]
fn export_incomes_csv_marks_salary() {
    let conn = base_conn();
    let i = |source: &str, amount| ParsedIncome {
        source: source.into(),
        amount,
    };
    create_income_at(&conn, &i("給料", 250000), at("2025-01-25 09:00:00")).unwrap();
    create_income_at(&conn, &i("フリマ", 1200), at("2025-01-28 18:00:00")).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("incomes.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, &["incomes", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,created_at,source,amount,kind",
            "1,2025-01-25 09:00:00,給料,250000,salary",
            "2,2025-01-28 18:00:00,フリマ,1200,other",
        ]
    );
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let err = run_export(&conn, &["expenses", "--format", "xml", "--out", &out_str]).unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
    assert!(!out_path.exists());
}
