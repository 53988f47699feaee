// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_yen, get_initial_balance, parse_amount, set_initial_balance};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", _)) => {
            println!("Initial balance: {}", fmt_yen(get_initial_balance(conn)?));
        }
        Some(("set", sub)) => {
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
            set_initial_balance(conn, amount)?;
            println!("Initial balance set to {}", fmt_yen(amount));
        }
        _ => {}
    }
    Ok(())
}
