// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use moneylite::commands::expenses::create_expense_at;
use moneylite::commands::fixed::create_fixed_expense;
use moneylite::commands::incomes::create_income_at;
use moneylite::commands::reports::spend_by_category;
use moneylite::commands::summary::{compute_summary, is_salary};
use moneylite::cycle::PayCycle;
use moneylite::models::{CategorySpend, ParsedExpense, ParsedIncome};
use moneylite::{db, utils};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn spend(conn: &Connection, item: &str, price: i64, category: &str, when: &str) {
    let e = ParsedExpense {
        item: item.into(),
        price,
        category: category.into(),
    };
    create_expense_at(conn, &e, at(when)).unwrap();
}

fn earn(conn: &Connection, source: &str, amount: i64, when: &str) {
    let i = ParsedIncome {
        source: source.into(),
        amount,
    };
    create_income_at(conn, &i, at(when)).unwrap();
}

fn seeded() -> Connection {
    let conn = setup();
    utils::set_initial_balance(&conn, 10000).unwrap();

    spend(&conn, "前の周期", 9999, "食費", "2025-02-24 23:59:59");
    spend(&conn, "ランチ", 1000, "食費", "2025-02-25 00:00:00");
    spend(&conn, "電車", 500, "交通費", "2025-03-24 23:00:00");
    spend(&conn, "次の周期", 700, "食費", "2025-03-25 00:00:00");

    earn(&conn, "先月の給料", 240000, "2025-01-25 09:00:00");
    earn(&conn, "給料", 250000, "2025-02-25 09:00:00");
    earn(&conn, "フリマ売上", 3000, "2025-03-01 12:00:00");

    create_fixed_expense(&conn, "家賃", 80000).unwrap();
    create_fixed_expense(&conn, "サブスク", 1000).unwrap();
    conn
}

#[test]
fn before_the_25th_uses_previous_months_payday() {
    let conn = seeded();
    let s = compute_summary(&conn, day("2025-03-10")).unwrap();
    assert_eq!(s.cycle_start, day("2025-02-25"));
    assert_eq!(s.cycle_end, day("2025-03-25"));
    assert_eq!(s.expense_total, 1500);
    assert_eq!(s.salary_income, 250000);
    assert_eq!(s.other_income, 3000);
    assert_eq!(s.fixed_total, 81000);
    assert_eq!(s.initial_balance, 10000);
    assert_eq!(s.current_balance, 261500);
    assert_eq!(s.projected_balance, 180500);
}

#[test]
fn on_the_25th_uses_this_months_payday() {
    let conn = seeded();
    let s = compute_summary(&conn, day("2025-03-25")).unwrap();
    assert_eq!(s.cycle_start, day("2025-03-25"));
    assert_eq!(s.cycle_end, day("2025-04-25"));
    assert_eq!(s.expense_total, 700);
    assert_eq!(s.salary_income, 0);
    assert_eq!(s.other_income, 0);
    assert_eq!(s.current_balance, 9300);
    // fixed expenses are not window-filtered
    assert_eq!(s.projected_balance, 9300 - 81000);
}

#[test]
fn empty_store_summary_is_all_zero() {
    let conn = setup();
    let s = compute_summary(&conn, day("2025-12-31")).unwrap();
    assert_eq!(s.cycle_start, day("2025-12-25"));
    assert_eq!(s.cycle_end, day("2026-01-25"));
    assert_eq!(s.current_balance, 0);
    assert_eq!(s.projected_balance, 0);
}

#[test]
fn salary_markers() {
    assert!(is_salary("給料"));
    assert!(is_salary("3月分給与"));
    assert!(!is_salary("ボーナス"));
}

#[test]
fn spend_by_category_within_cycle() {
    let conn = seeded();
    spend(&conn, "コンビニ", 1000, "食費", "2025-03-02 10:00:00");
    let cycle = PayCycle::containing(day("2025-03-10"));
    let data = spend_by_category(&conn, &cycle).unwrap();
    assert_eq!(
        data,
        vec![
            CategorySpend {
                category: "食費".into(),
                total: 2000,
                count: 2,
            },
            CategorySpend {
                category: "交通費".into(),
                total: 500,
                count: 1,
            },
        ]
    );
}

#[test]
fn balance_overflow_is_an_error_not_a_panic() {
    let conn = setup();
    utils::set_initial_balance(&conn, i64::MAX).unwrap();
    earn(&conn, "給料", 1, "2025-03-01 09:00:00");

    let err = compute_summary(&conn, day("2025-03-10")).unwrap_err();
    assert!(err.to_string().contains("Balance overflow in cycle 2025-02-25..2025-03-25"));
}

#[test]
fn income_sum_overflow_is_an_error() {
    let conn = setup();
    earn(&conn, "フリマ", i64::MAX, "2025-03-01 09:00:00");
    earn(&conn, "フリマ", 1, "2025-03-02 09:00:00");
    assert!(compute_summary(&conn, day("2025-03-10")).is_err());
}

#[test]
fn projected_balance_overflow_is_an_error() {
    let conn = setup();
    utils::set_initial_balance(&conn, i64::MIN).unwrap();
    create_fixed_expense(&conn, "家賃", 1).unwrap();
    assert!(compute_summary(&conn, day("2025-03-10")).is_err());
}
