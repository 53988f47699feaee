// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{INITIAL_BALANCE_KEY, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = diagnose(conn)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn diagnose(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Entries where no amount could be parsed
    let mut stmt = conn.prepare("SELECT id, item FROM expenses WHERE price = 0 ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let item: String = r.get(1)?;
        rows.push(vec!["expense_zero_amount".into(), format!("#{} {}", id, item)]);
    }
    let mut stmt = conn.prepare("SELECT id, source FROM incomes WHERE amount = 0 ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let source: String = r.get(1)?;
        rows.push(vec!["income_zero_amount".into(), format!("#{} {}", id, source)]);
    }

    // 2) Negative recurring amounts
    let mut stmt =
        conn.prepare("SELECT id, name, amount FROM fixed_expenses WHERE amount < 0 ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let amount: i64 = r.get(2)?;
        rows.push(vec![
            "fixed_negative_amount".into(),
            format!("#{} {} ({})", id, name, amount),
        ]);
    }

    // 3) Unreadable initial balance
    let stored: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            [INITIAL_BALANCE_KEY],
            |r| r.get(0),
        )
        .optional()?;
    if let Some(v) = stored.filter(|v| v.trim().parse::<i64>().is_err()) {
        rows.push(vec!["invalid_initial_balance".into(), v]);
    }

    for r in &rows {
        tracing::warn!(issue = %r[0], detail = %r[1], "doctor finding");
    }
    Ok(rows)
}
