// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::Classifier;
use crate::db::TIMESTAMP_FMT;
use crate::models::{Expense, ParsedExpense};
use crate::parser::parse_expense;
use crate::utils::{fmt_yen, maybe_print_json, parse_id, pretty_table, timestamp_col};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let text = sub.get_one::<String>("text").unwrap();
    let classifier = Classifier::load(conn)?;
    let mut parsed = parse_expense(text, &classifier)?;
    if let Some(cat) = sub
        .get_one::<String>("category")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    {
        parsed.category = cat.to_string();
    }
    let e = create_expense(conn, &parsed)?;
    println!(
        "Recorded #{} '{}' {} [{}]",
        e.id,
        e.item,
        fmt_yen(e.price),
        e.category
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = list_expenses(conn)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.created_at.format(TIMESTAMP_FMT).to_string(),
                    e.item.clone(),
                    fmt_yen(e.price),
                    e.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Created", "Item", "Price", "Category"], rows)
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    if delete_expense(conn, id)? {
        println!("Removed expense {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

pub fn create_expense(conn: &Connection, e: &ParsedExpense) -> Result<Expense> {
    create_expense_at(conn, e, Local::now().naive_local())
}

pub fn create_expense_at(
    conn: &Connection,
    e: &ParsedExpense,
    at: NaiveDateTime,
) -> Result<Expense> {
    conn.execute(
        "INSERT INTO expenses(item, price, category, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![e.item, e.price, e.category, at.format(TIMESTAMP_FMT).to_string()],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(id, price = e.price, category = %e.category, "expense created");
    get_expense(conn, id)?.with_context(|| format!("Expense {} vanished after insert", id))
}

pub fn get_expense(conn: &Connection, id: i64) -> Result<Option<Expense>> {
    let e = conn
        .query_row(
            "SELECT id, item, price, category, created_at FROM expenses WHERE id=?1",
            params![id],
            row_to_expense,
        )
        .optional()?;
    Ok(e)
}

/// Newest first.
pub fn list_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, item, price, category, created_at FROM expenses
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], row_to_expense)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn delete_expense(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    tracing::debug!(id, deleted = n > 0, "expense delete");
    Ok(n > 0)
}

fn row_to_expense(r: &rusqlite::Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: r.get(0)?,
        item: r.get(1)?,
        price: r.get(2)?,
        category: r.get(3)?,
        created_at: timestamp_col(r, 4)?,
    })
}
