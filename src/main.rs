//! debt-simplifier CLI
//!
//! Settle group expenses from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Settle debts listed in a text file (one "from to amount" per line)
//! debt-simplifier settle --input expenses.txt
//!
//! # Save the payment plan and print JSON
//! debt-simplifier settle --input expenses.txt --output plan.txt --format json
//!
//! # Type debts in one per line, finish with "done"
//! debt-simplifier batch
//!
//! # Generate a random group for testing
//! debt-simplifier generate --participants 8 --transactions 40
//! ```

use debt_simplifier::core::transaction::Settlement;
use debt_simplifier::group::ExpenseGroup;
use debt_simplifier::optimization::balances::Standing;
use debt_simplifier::report::{BalanceTable, ReportConfig, SettlementTable, TransactionTable};
use debt_simplifier::simulation::random_group::{generate_random_group, GroupConfig};
use debt_simplifier::storage::{self, LoadReport};
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::process;

fn print_usage() {
    eprintln!(
        r#"debt-simplifier — settle group expenses with as few payments as possible

USAGE:
    debt-simplifier <COMMAND> [OPTIONS]

COMMANDS:
    settle      Load debts from a file and print the payment plan
    balances    Load debts from a file and print net balances
    batch       Read "from to amount" lines from stdin until "done"
    demo        Settle a built-in five-person example
    generate    Generate a random expense file (for testing)
    help        Show this message

OPTIONS (settle, balances, batch):
    --input <FILE>              Path to a "from to amount" text file
    --format <FORMAT>           Output format: text (default) or json
    --output <FILE>             Save the payment plan to a file (settle, batch)
    --currency-symbol <S>       Symbol printed before amounts (default: ₹)
    --amount-separator <S>      Text between payee and amount in saved plans
                                (default: none)

OPTIONS (generate):
    --participants <N>          Number of participants (default: 10)
    --transactions <N>          Number of transactions (default: 30)
    --output <FILE>             Write to file instead of stdout

EXAMPLES:
    debt-simplifier settle --input trip.txt
    debt-simplifier settle --input trip.txt --output plan.txt --amount-separator " "
    debt-simplifier balances --input trip.txt --format json
    debt-simplifier generate --participants 5 --transactions 12 --output trip.txt"#
    );
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    output: Option<String>,
    format: Option<Format>,
    report: ReportConfig,
    group: GroupConfig,
}

impl Options {
    fn format(&self) -> Format {
        self.format.unwrap_or(Format::Text)
    }

    fn input(&self) -> &str {
        self.input
            .as_deref()
            .unwrap_or_else(|| fail("--input <FILE> is required"))
    }
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = || {
            args.get(i)
                .cloned()
                .unwrap_or_else(|| fail(format!("{} requires a value", flag)))
        };
        match flag {
            "--input" => options.input = Some(value()),
            "--output" => options.output = Some(value()),
            "--format" => {
                options.format = Some(match value().as_str() {
                    "text" => Format::Text,
                    "json" => Format::Json,
                    other => fail(format!("unknown format '{}', expected text or json", other)),
                })
            }
            "--currency-symbol" => options.report.currency_symbol = value(),
            "--amount-separator" => options.report.amount_separator = value(),
            "--participants" => {
                options.group.participant_count = value()
                    .parse()
                    .unwrap_or_else(|_| fail("--participants requires a number"))
            }
            "--transactions" => {
                options.group.transaction_count = value()
                    .parse()
                    .unwrap_or_else(|_| fail("--transactions requires a number"))
            }
            _ => fail(format!("unknown option: {}", flag)),
        }
        i += 1;
    }
    options
}

/// JSON output schema for a processed group.
#[derive(serde::Serialize)]
struct SettleOutput<'a> {
    transactions: usize,
    payments: usize,
    reduction_percent: f64,
    gross_total: i64,
    outstanding_total: i64,
    valid: bool,
    balances: Vec<BalanceOutput>,
    settlements: &'a [Settlement],
}

#[derive(serde::Serialize)]
struct BalanceOutput {
    person: String,
    net_balance: i64,
    status: Standing,
}

fn balance_outputs(group: &ExpenseGroup) -> Vec<BalanceOutput> {
    group
        .net_balances()
        .iter()
        .map(|(person, net)| BalanceOutput {
            person: person.to_string(),
            net_balance: *net,
            status: Standing::of(*net),
        })
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(format!("could not serialize output: {}", e)),
    }
}

fn load_group(path: &str) -> ExpenseGroup {
    let mut group = ExpenseGroup::new();
    let LoadReport {
        loaded,
        rejected,
        skipped,
    } = storage::load(path, &mut group).unwrap_or_else(|e| fail(e));
    eprintln!("Loaded {} transactions from {}", loaded, path);
    if rejected + skipped > 0 {
        eprintln!("Ignored {} invalid and {} malformed lines", rejected, skipped);
    }
    group
}

/// Print the plan for an already processed group and save it if asked.
fn finish(group: &ExpenseGroup, options: &Options) {
    let Some(result) = group.last_result() else {
        println!("No transactions to process!");
        return;
    };

    match options.format() {
        Format::Json => print_json(&SettleOutput {
            transactions: result.original_count(),
            payments: result.settlement_count(),
            reduction_percent: result.reduction_percent(),
            gross_total: result.gross_total(),
            outstanding_total: result.outstanding_total(),
            valid: result.is_valid(),
            balances: balance_outputs(group),
            settlements: result.settlements(),
        }),
        Format::Text => {
            println!(
                "{}",
                TransactionTable {
                    transactions: group.original_transactions(),
                    config: &options.report,
                }
            );
            println!("{}", BalanceTable { balances: result.balances() });
            println!(
                "{}",
                SettlementTable {
                    result,
                    config: &options.report,
                }
            );
        }
    }

    if let Some(path) = &options.output {
        storage::save(path, group.settlements(), &options.report).unwrap_or_else(|e| fail(e));
        eprintln!("Results saved to {}", path);
    }
}

fn cmd_settle(args: &[String]) {
    let options = parse_options(args);
    let mut group = load_group(options.input());
    group.process();
    finish(&group, &options);
}

fn cmd_balances(args: &[String]) {
    let options = parse_options(args);
    let mut group = load_group(options.input());
    group.process();

    match options.format() {
        Format::Json => print_json(&balance_outputs(&group)),
        Format::Text => print!(
            "{}",
            BalanceTable {
                balances: group.net_balances()
            }
        ),
    }
}

fn cmd_batch(args: &[String]) {
    let options = parse_options(args);
    let mut group = ExpenseGroup::new();

    eprintln!("Enter transactions (type 'done' to finish)");
    eprintln!("Format: From To Amount");
    eprintln!("Example: Alice Bob 100");

    let stdin = io::stdin();
    let mut added = 0;
    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| fail(format!("could not read input: {}", e)));
        let trimmed = line.trim();
        if trimmed == "done" || trimmed == "DONE" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        match storage::parse_line(trimmed) {
            Some((from, to, amount)) => match group.record_transaction(from, to, amount) {
                Ok(()) => {
                    added += 1;
                    eprintln!("Transaction added successfully!");
                }
                Err(e) => eprintln!("Error: {}", e),
            },
            None => eprintln!("Invalid format! Please use: From To Amount"),
        }
    }
    eprintln!("Batch entry completed! Added {} transactions.", added);

    group.process();
    finish(&group, &options);
}

fn cmd_demo(args: &[String]) {
    let options = parse_options(args);
    let mut group = ExpenseGroup::new();

    let entries = [
        ("Alice", "Bob", 100),
        ("Bob", "Charlie", 50),
        ("Charlie", "Alice", 30),
        ("David", "Alice", 20),
        ("Bob", "David", 10),
    ];
    for (from, to, amount) in entries {
        group
            .record_transaction(from, to, amount)
            .unwrap_or_else(|e| fail(e));
    }

    group.process();
    finish(&group, &options);
}

fn cmd_generate(args: &[String]) {
    let options = parse_options(args);
    let ledger = generate_random_group(&options.group);
    debug!("generated {} transactions", ledger.count());

    match &options.output {
        Some(path) => {
            storage::save_transactions(path, ledger.transactions()).unwrap_or_else(|e| fail(e));
            eprintln!(
                "Generated {} transactions across {} participants → {}",
                ledger.count(),
                options.group.participant_count,
                path
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            storage::write_transactions(&mut out, ledger.transactions())
                .and_then(|()| out.flush())
                .unwrap_or_else(|e| fail(e));
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "balances" => cmd_balances(rest),
        "batch" => cmd_batch(rest),
        "demo" => cmd_demo(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
