// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::FixedExpense;
use crate::utils::{fmt_yen, maybe_print_json, parse_amount, parse_id, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
            let f = create_fixed_expense(conn, name, amount)?;
            println!(
                "Added fixed expense #{} '{}' {}/month",
                f.id,
                f.name,
                fmt_yen(f.amount)
            );
        }
        Some(("list", sub)) => {
            let data = list_fixed_expenses(conn)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let total: i64 = data.iter().map(|f| f.amount).sum();
                let mut rows: Vec<Vec<String>> = data
                    .iter()
                    .map(|f| vec![f.id.to_string(), f.name.clone(), fmt_yen(f.amount)])
                    .collect();
                rows.push(vec![String::new(), "Total".into(), fmt_yen(total)]);
                println!("{}", pretty_table(&["ID", "Name", "Amount"], rows));
            }
        }
        Some(("rm", sub)) => {
            let id = parse_id(sub.get_one::<String>("id").unwrap())?;
            if delete_fixed_expense(conn, id)? {
                println!("Removed fixed expense {}", id);
            } else {
                println!("No fixed expense with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn create_fixed_expense(conn: &Connection, name: &str, amount: i64) -> Result<FixedExpense> {
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Fixed expense name must not be empty"));
    }
    conn.execute(
        "INSERT INTO fixed_expenses(name, amount) VALUES (?1, ?2)",
        params![name, amount],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(id, amount, "fixed expense created");
    Ok(FixedExpense {
        id,
        name: name.to_string(),
        amount,
    })
}

pub fn list_fixed_expenses(conn: &Connection) -> Result<Vec<FixedExpense>> {
    let mut stmt = conn.prepare("SELECT id, name, amount FROM fixed_expenses ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(FixedExpense {
            id: r.get(0)?,
            name: r.get(1)?,
            amount: r.get(2)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn fixed_total(conn: &Connection) -> Result<i64> {
    let total: i64 = conn.query_row(
        "SELECT IFNULL(SUM(amount), 0) FROM fixed_expenses",
        [],
        |r| r.get(0),
    )?;
    Ok(total)
}

pub fn delete_fixed_expense(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM fixed_expenses WHERE id=?1", params![id])?;
    tracing::debug!(id, deleted = n > 0, "fixed expense delete");
    Ok(n > 0)
}
