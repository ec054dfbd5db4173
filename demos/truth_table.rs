//! Command-line front end: prints the truth table of a formula.
//!
//! Run with: `cargo run --example truth-table -- "A ^ B"`

use clap::{Parser, ValueEnum};
use log::info;
use truth_table::csv::CsvConfig;
use truth_table::parser::parse;
use truth_table::table::{evaluate_with, EvalConfig};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Format {
    /// Aligned text table
    Table,
    /// Comma-separated values
    Csv,
}

#[derive(Parser)]
#[command(name = "truth-table")]
#[command(about = "Truth table generator for propositional formulas")]
struct Args {
    /// Formula, e.g. "A & B", "~A | B", "A >> B", "A == B", "A ^ B"
    #[arg(default_value = "A ^ B")]
    expr: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Also print the LaTeX rendering of the formula
    #[arg(long)]
    latex: bool,

    /// Maximum number of variables
    #[arg(long, default_value = "10")]
    max_vars: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    info!("Input: {}", args.expr);
    let expr = parse(&args.expr)?;
    let config = EvalConfig::with_max_variables(args.max_vars);
    let table = evaluate_with(&expr, &config)?;
    info!("{} variables, {} rows", table.variables().len(), table.len());

    match args.format {
        Format::Table => print!("{}", table),
        Format::Csv => table.write_csv(std::io::stdout(), &CsvConfig::default())?,
    }

    if args.latex {
        println!();
        println!("LaTeX: {}", expr.to_latex());
    }

    if args.format == Format::Table {
        let verdict = table.classification();
        println!();
        println!("This expression is a {} ({}).", verdict, verdict.description());
    }

    Ok(())
}
