// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Inclusive lower date bound"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Inclusive upper date bound"),
    )
}

fn list_cmd() -> Command {
    let cmd = Command::new("list").arg(
        Arg::new("limit")
            .long("limit")
            .value_parser(clap::value_parser!(usize))
            .help("Show at most N rows"),
    );
    json_flags(range_args(cmd))
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn income_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("amount").long("amount").required(true))
        .arg(
            Arg::new("category")
                .long("category")
                .required(true)
                .help("salary|freelance|investments|other"),
        )
        .arg(Arg::new("description").long("description"))
        .arg(
            Arg::new("date")
                .long("date")
                .value_name("YYYY-MM-DD")
                .required(true),
        )
}

fn expense_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("amount").long("amount").required(true))
        .arg(
            Arg::new("category")
                .long("category")
                .required(true)
                .help("food|grocery|medical|bills|education|online_order|rent|entertainment|shopping|travel|sports|emi|savings|debt|loan|others"),
        )
        .arg(Arg::new("description").long("description").required(true))
        .arg(
            Arg::new("date")
                .long("date")
                .value_name("YYYY-MM-DD")
                .required(true),
        )
        .arg(
            Arg::new("paid-via")
                .long("paid-via")
                .required(true)
                .help("cash|credit_card|debit_card|e_wallet|net_banking|upi"),
        )
}

fn investment_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").long("name").required(true))
        .arg(Arg::new("units").long("units").required(true))
        .arg(
            Arg::new("price")
                .long("price")
                .required(true)
                .help("Price per unit; the stored amount is units * price"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .required(true)
                .help("stocks|mutual_funds|real_estate|crypto|bonds|gold|other"),
        )
        .arg(Arg::new("notes").long("notes"))
        .arg(
            Arg::new("date")
                .long("date")
                .value_name("YYYY-MM-DD")
                .required(true),
        )
}

fn subscription_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").long("name").required(true))
        .arg(Arg::new("amount").long("amount").required(true))
        .arg(
            Arg::new("cycle")
                .long("cycle")
                .required(true)
                .help("monthly|quarterly|yearly"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("YYYY-MM-DD")
                .required(true),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .default_value("active")
                .help("active|cancelled"),
        )
        .arg(Arg::new("notes").long("notes"))
}

fn entity_cmd(
    name: &'static str,
    about: &'static str,
    fields: fn(Command) -> Command,
) -> Command {
    Command::new(name)
        .about(about)
        .subcommand(fields(Command::new("add")))
        .subcommand(list_cmd())
        .subcommand(fields(Command::new("edit").arg(id_arg())))
        .subcommand(Command::new("rm").arg(id_arg()))
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("FinTrack: personal income, expense, investment, and subscription tracker")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("login")
                .about("Sign in as a user")
                .arg(Arg::new("user").long("user").required(true)),
        )
        .subcommand(Command::new("logout").about("Sign out"))
        .subcommand(Command::new("whoami").about("Show the signed-in user"))
        .subcommand(entity_cmd("income", "Record and manage incomes", income_fields))
        .subcommand(entity_cmd("expense", "Record and manage expenses", expense_fields))
        .subcommand(entity_cmd(
            "investment",
            "Record and manage investments",
            investment_fields,
        ))
        .subcommand(entity_cmd(
            "subscription",
            "Record and manage subscriptions",
            subscription_fields,
        ))
        .subcommand(json_flags(range_args(
            Command::new("dashboard")
                .about("Totals, balance, recent transactions, and category breakdown"),
        )))
        .subcommand(
            Command::new("export")
                .about("Export an entity's records to CSV or JSON")
                .arg(
                    Arg::new("entity")
                        .required(true)
                        .help("incomes|expenses|investments|subscriptions"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("prefs")
                .about("Display preferences")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .help("INR|USD|EUR|GBP"),
                        )
                        .arg(
                            Arg::new("date-format")
                                .long("date-format")
                                .help("DD/MM/YYYY|MM/DD/YYYY|YYYY-MM-DD"),
                        ),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored rows for inconsistencies"))
}
