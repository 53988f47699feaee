// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::{expenses::list_expenses, incomes::list_incomes, summary::is_salary};
use crate::db::TIMESTAMP_FMT;
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some((kind @ ("expenses" | "incomes"), sub)) => {
            let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
            let out = sub.get_one::<String>("out").unwrap().trim();
            let (headers, rows) = collect(conn, kind)?;
            match fmt.as_str() {
                "csv" => write_csv(out, &headers, &rows)?,
                "json" => write_json(out, &headers, &rows)?,
                _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
            }
            tracing::info!(kind, rows = rows.len(), out, "export written");
            println!("Exported {} {} to {}", rows.len(), kind, out);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn collect(conn: &Connection, kind: &str) -> Result<([&'static str; 5], Vec<[String; 5]>)> {
    if kind == "expenses" {
        let rows = list_expenses(conn)?
            .into_iter()
            .rev()
            .map(|e| {
                [
                    e.id.to_string(),
                    e.created_at.format(TIMESTAMP_FMT).to_string(),
                    e.item,
                    e.price.to_string(),
                    e.category,
                ]
            })
            .collect();
        Ok((["id", "created_at", "item", "price", "category"], rows))
    } else {
        let rows = list_incomes(conn)?
            .into_iter()
            .rev()
            .map(|i| {
                let kind = if is_salary(&i.source) { "salary" } else { "other" };
                [
                    i.id.to_string(),
                    i.created_at.format(TIMESTAMP_FMT).to_string(),
                    i.source,
                    i.amount.to_string(),
                    kind.to_string(),
                ]
            })
            .collect();
        Ok((["id", "created_at", "source", "amount", "kind"], rows))
    }
}

fn write_csv(out: &str, headers: &[&str; 5], rows: &[[String; 5]]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
    wtr.write_record(headers)?;
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(out: &str, headers: &[&str; 5], rows: &[[String; 5]]) -> Result<()> {
    let items: Vec<serde_json::Value> = rows
        .iter()
        .map(|r| {
            let mut obj = serde_json::Map::new();
            for (h, v) in headers.iter().zip(r.iter()) {
                // numeric columns stay numeric in JSON
                let val = match v.parse::<i64>() {
                    Ok(n) if matches!(*h, "id" | "price" | "amount") => json!(n),
                    _ => json!(v),
                };
                obj.insert(h.to_string(), val);
            }
            serde_json::Value::Object(obj)
        })
        .collect();
    std::fs::write(out, serde_json::to_string_pretty(&items)?)
        .with_context(|| format!("Write {}", out))?;
    Ok(())
}
