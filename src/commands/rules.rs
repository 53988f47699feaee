// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::KeywordRule;
use crate::utils::{parse_id, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let keyword = sub.get_one::<String>("keyword").unwrap();
            let category = sub.get_one::<String>("category").unwrap();
            let rule = add_rule(conn, keyword, category)?;
            println!(
                "Added rule #{}: '{}' -> {}",
                rule.id, rule.keyword, rule.category
            );
        }
        Some(("list", _)) => {
            let data = list_rules(conn)?
                .into_iter()
                .map(|r| vec![r.id.to_string(), r.keyword, r.category])
                .collect();
            println!("{}", pretty_table(&["ID", "Keyword", "Category"], data));
        }
        Some(("rm", sub)) => {
            let id = parse_id(sub.get_one::<String>("id").unwrap())?;
            if remove_rule(conn, id)? {
                println!("Removed rule {}", id);
            } else {
                println!("No rule with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn add_rule(conn: &Connection, keyword: &str, category: &str) -> Result<KeywordRule> {
    let keyword = keyword.trim();
    let category = category.trim();
    if keyword.is_empty() {
        return Err(anyhow!("Rule keyword must not be empty"));
    }
    if category.is_empty() {
        return Err(anyhow!("Rule category must not be empty"));
    }
    conn.execute(
        "INSERT INTO keyword_rules(keyword, category) VALUES (?1, ?2)",
        params![keyword, category],
    )
    .map_err(|e| anyhow!("Could not add rule '{}' -> {}: {}", keyword, category, e))?;
    let id = conn.last_insert_rowid();
    tracing::debug!(id, keyword, category, "keyword rule added");
    Ok(KeywordRule {
        id,
        keyword: keyword.to_string(),
        category: category.to_string(),
    })
}

pub fn list_rules(conn: &Connection) -> Result<Vec<KeywordRule>> {
    let mut stmt = conn.prepare("SELECT id, keyword, category FROM keyword_rules ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(KeywordRule {
            id: r.get(0)?,
            keyword: r.get(1)?,
            category: r.get(2)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn remove_rule(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM keyword_rules WHERE id=?1", params![id])?;
    Ok(n > 0)
}
