// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id").long("id").required(true).help("Record id")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Evaluate as of this day (YYYY-MM-DD, default today)")
}

pub fn build_cli() -> Command {
    Command::new("moneylite")
        .version(crate_version!())
        .about("Household expense and income tracker with 25th-to-25th pay-cycle balances")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("MONEYLITE_DB")
                .help("Path to the SQLite database file"),
        )
        .subcommand(Command::new("init").about("Create the database and tables"))
        .subcommand(
            Command::new("parse")
                .about("Show how a sentence would be recorded, without saving")
                .arg(Arg::new("text").required(true))
                .arg(
                    Arg::new("income")
                        .long("income")
                        .action(ArgAction::SetTrue)
                        .help("Parse as an income instead of an expense"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("expense")
                .about("Record, list or remove expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense from free text, e.g. 'コンビニでパン 300円'")
                        .arg(Arg::new("text").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Override the keyword classification"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("Newest first")))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("income")
                .about("Record, list or remove incomes")
                .subcommand(
                    Command::new("add")
                        .about("Record an income from free text, e.g. '給料 250,000円'")
                        .arg(Arg::new("text").required(true)),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("fixed")
                .about("Recurring monthly expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        ),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("balance")
                .about("Initial balance the pay cycle starts from")
                .subcommand(Command::new("get"))
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("amount")
                            .long("amount")
                            .required(true)
                            .allow_hyphen_values(true),
                    ),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Balance summary for the current pay cycle")
                .arg(date_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("report")
                .about("Reports")
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Spend per category in the pay cycle")
                        .arg(date_arg()),
                )),
        )
        .subcommand(
            Command::new("rules")
                .about("User keyword rules, checked before the built-in ones")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("keyword").long("keyword").required(true))
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(Command::new("list"))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("category")
                .about("Category vocabulary")
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("export")
                .about("Export records to a file")
                .subcommand(export_cmd("expenses"))
                .subcommand(export_cmd("incomes")),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}

fn export_cmd(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("csv")
                .help("csv | json"),
        )
        .arg(Arg::new("out").long("out").required(true))
}
