// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::Classifier;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashMap;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let data = category_counts(conn)?
                .into_iter()
                .map(|(cat, n)| vec![cat, n.to_string()])
                .collect();
            println!("{}", pretty_table(&["Category", "Expenses"], data));
        }
        _ => {}
    }
    Ok(())
}

/// Rule vocabulary in classification order with expense counts, followed by
/// any stored categories outside it (from `--category` overrides), by name.
pub fn category_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt =
        conn.prepare("SELECT category, COUNT(*) FROM expenses GROUP BY category ORDER BY category")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?;
    let mut counts: Vec<(String, i64)> = Vec::new();
    for row in rows {
        counts.push(row?);
    }

    let classifier = Classifier::load(conn)?;
    let vocab = classifier.categories();
    let by_name: HashMap<&str, i64> = counts.iter().map(|(c, n)| (c.as_str(), *n)).collect();

    let mut data: Vec<(String, i64)> = vocab
        .iter()
        .map(|c| (c.to_string(), by_name.get(c).copied().unwrap_or(0)))
        .collect();
    data.extend(
        counts
            .iter()
            .filter(|(c, _)| !vocab.contains(&c.as_str()))
            .cloned(),
    );
    Ok(data)
}
