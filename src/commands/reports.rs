// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cycle::PayCycle;
use crate::models::CategorySpend;
use crate::utils::{fmt_yen, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::Local;
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let cycle = PayCycle::containing(today);
    let data = spend_by_category(conn, &cycle)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|c| vec![c.category.clone(), c.count.to_string(), fmt_yen(c.total)])
            .collect();
        println!("Cycle {} .. {}", cycle.start, cycle.end);
        println!("{}", pretty_table(&["Category", "Entries", "Spent"], rows));
    }
    Ok(())
}

/// Largest spend first; ties broken by category name.
pub fn spend_by_category(conn: &Connection, cycle: &PayCycle) -> Result<Vec<CategorySpend>> {
    let (lo, hi) = cycle.bounds_sql();
    let mut stmt = conn.prepare(
        "SELECT category, SUM(price) AS total, COUNT(*) FROM expenses
         WHERE created_at >= ?1 AND created_at < ?2
         GROUP BY category
         ORDER BY total DESC, category",
    )?;
    let rows = stmt.query_map(params![lo, hi], |r| {
        Ok(CategorySpend {
            category: r.get(0)?,
            total: r.get(1)?,
            count: r.get(2)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}
