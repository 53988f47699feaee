// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::TIMESTAMP_FMT;
use crate::models::{Income, ParsedIncome};
use crate::parser::parse_income;
use crate::utils::{fmt_yen, maybe_print_json, parse_id, pretty_table, timestamp_col};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let text = sub.get_one::<String>("text").unwrap();
            let parsed = parse_income(text)?;
            let inc = create_income(conn, &parsed)?;
            println!(
                "Recorded income #{} '{}' {}",
                inc.id,
                inc.source,
                fmt_yen(inc.amount)
            );
        }
        Some(("list", sub)) => {
            let data = list_incomes(conn)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .iter()
                    .map(|i| {
                        vec![
                            i.id.to_string(),
                            i.created_at.format(TIMESTAMP_FMT).to_string(),
                            i.source.clone(),
                            fmt_yen(i.amount),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["ID", "Created", "Source", "Amount"], rows)
                );
            }
        }
        Some(("rm", sub)) => {
            let id = parse_id(sub.get_one::<String>("id").unwrap())?;
            if delete_income(conn, id)? {
                println!("Removed income {}", id);
            } else {
                println!("No income with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn create_income(conn: &Connection, inc: &ParsedIncome) -> Result<Income> {
    create_income_at(conn, inc, Local::now().naive_local())
}

pub fn create_income_at(
    conn: &Connection,
    inc: &ParsedIncome,
    at: NaiveDateTime,
) -> Result<Income> {
    conn.execute(
        "INSERT INTO incomes(source, amount, created_at) VALUES (?1, ?2, ?3)",
        params![inc.source, inc.amount, at.format(TIMESTAMP_FMT).to_string()],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(id, amount = inc.amount, "income created");
    get_income(conn, id)?.with_context(|| format!("Income {} vanished after insert", id))
}

pub fn get_income(conn: &Connection, id: i64) -> Result<Option<Income>> {
    let inc = conn
        .query_row(
            "SELECT id, source, amount, created_at FROM incomes WHERE id=?1",
            params![id],
            row_to_income,
        )
        .optional()?;
    Ok(inc)
}

pub fn list_incomes(conn: &Connection) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare(
        "SELECT id, source, amount, created_at FROM incomes ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], row_to_income)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn delete_income(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM incomes WHERE id=?1", params![id])?;
    tracing::debug!(id, deleted = n > 0, "income delete");
    Ok(n > 0)
}

fn row_to_income(r: &rusqlite::Row<'_>) -> rusqlite::Result<Income> {
    Ok(Income {
        id: r.get(0)?,
        source: r.get(1)?,
        amount: r.get(2)?,
        created_at: timestamp_col(r, 3)?,
    })
}
