// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::Classifier;
use crate::parser::{parse_expense, parse_income};
use crate::utils::{fmt_yen, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

/// Shows how a sentence would be recorded without saving it.
pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let text = sub.get_one::<String>("text").unwrap();
    let json_flag = sub.get_flag("json");
    if sub.get_flag("income") {
        let p = parse_income(text)?;
        if !maybe_print_json(json_flag, false, &p)? {
            println!(
                "{}",
                pretty_table(&["Source", "Amount"], vec![vec![p.source, fmt_yen(p.amount)]])
            );
        }
    } else {
        let p = parse_expense(text, &Classifier::load(conn)?)?;
        if !maybe_print_json(json_flag, false, &p)? {
            println!(
                "{}",
                pretty_table(
                    &["Item", "Price", "Category"],
                    vec![vec![p.item, fmt_yen(p.price), p.category]],
                )
            );
        }
    }
    Ok(())
}
