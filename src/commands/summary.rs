// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pay-cycle balance summary.
//!
//! Expenses and incomes are counted only when their `created_at` falls in the
//! cycle containing the given day. Fixed expenses are monthly obligations and
//! always count in full.

use crate::commands::fixed::fixed_total;
use crate::cycle::PayCycle;
use crate::models::Summary;
use crate::utils::{fmt_yen, get_initial_balance, maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, params};

/// An income whose source contains one of these is counted as salary.
pub const SALARY_MARKERS: &[&str] = &["給料", "給与"];

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let s = compute_summary(conn, today)?;
    if !maybe_print_json(sub.get_flag("json"), false, &s)? {
        let rows = vec![
            vec![
                "Cycle".to_string(),
                format!("{} .. {}", s.cycle_start, s.cycle_end),
            ],
            vec!["Initial balance".into(), fmt_yen(s.initial_balance)],
            vec!["Salary".into(), fmt_yen(s.salary_income)],
            vec!["Other income".into(), fmt_yen(s.other_income)],
            vec!["Expenses".into(), fmt_yen(s.expense_total)],
            vec!["Current balance".into(), fmt_yen(s.current_balance)],
            vec!["Fixed expenses".into(), fmt_yen(s.fixed_total)],
            vec!["Projected balance".into(), fmt_yen(s.projected_balance)],
        ];
        println!("{}", pretty_table(&["", "Amount"], rows));
    }
    Ok(())
}

pub fn is_salary(source: &str) -> bool {
    SALARY_MARKERS.iter().any(|m| source.contains(m))
}

pub fn compute_summary(conn: &Connection, today: NaiveDate) -> Result<Summary> {
    let cycle = PayCycle::containing(today);
    let (lo, hi) = cycle.bounds_sql();

    let expense_total: i64 = conn.query_row(
        "SELECT IFNULL(SUM(price), 0) FROM expenses WHERE created_at >= ?1 AND created_at < ?2",
        params![lo, hi],
        |r| r.get(0),
    )?;

    let overflow = || anyhow!("Balance overflow in cycle {}..{}", cycle.start, cycle.end);

    let mut salary_income = 0i64;
    let mut other_income = 0i64;
    let mut stmt = conn
        .prepare("SELECT source, amount FROM incomes WHERE created_at >= ?1 AND created_at < ?2")?;
    let mut rows = stmt.query(params![lo, hi])?;
    while let Some(r) = rows.next()? {
        let source: String = r.get(0)?;
        let amount: i64 = r.get(1)?;
        let bucket = if is_salary(&source) {
            &mut salary_income
        } else {
            &mut other_income
        };
        *bucket = bucket.checked_add(amount).ok_or_else(overflow)?;
    }

    let initial_balance = get_initial_balance(conn)?;
    let fixed_total = fixed_total(conn)?;
    let current_balance = initial_balance
        .checked_add(salary_income)
        .and_then(|v| v.checked_add(other_income))
        .and_then(|v| v.checked_sub(expense_total))
        .ok_or_else(overflow)?;
    let projected_balance = current_balance
        .checked_sub(fixed_total)
        .ok_or_else(overflow)?;

    tracing::debug!(start = %cycle.start, end = %cycle.end, current_balance, "summary computed");
    Ok(Summary {
        cycle_start: cycle.start,
        cycle_end: cycle.end,
        initial_balance,
        salary_income,
        other_income,
        expense_total,
        fixed_total,
        current_balance,
        projected_balance,
    })
}
