//! Command-line demo: parse, pretty-print, and beta-reduce a handful of
//! seed expressions, or drop into an interactive loop with `--repl`.

use clap::{Parser as ClapParser, ValueEnum};
use folambda::{parser, symbols, Flavor};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FlavorArg {
    Legacy,
    Symbolic,
    Prover,
}

impl From<FlavorArg> for Flavor {
    fn from(f: FlavorArg) -> Flavor {
        match f {
            FlavorArg::Legacy => Flavor::Legacy,
            FlavorArg::Symbolic => Flavor::Symbolic,
            FlavorArg::Prover => Flavor::Prover,
        }
    }
}

#[derive(ClapParser, Debug)]
#[command(about = "Parse and reduce first-order lambda-calculus expressions")]
struct Cli {
    /// Which surface syntax to pretty-print in.
    #[arg(long, value_enum, default_value_t = FlavorArg::Symbolic)]
    flavor: FlavorArg,

    /// Load settings from a TOML config file instead of the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop into an interactive read-eval-print loop instead of running
    /// the seed demo.
    #[arg(long)]
    repl: bool,
}

const SEEDS: &[&str] = &[
    "\\x y.sees(x,y)(john,mary)",
    "exists x.(man(x) & walks(x))",
    "all x.(man(x) implies mortal(x))",
    "\\x.-man(x)",
    "john = john",
];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let flavor = if let Some(path) = &cli.config {
        let cfg = folambda::config::Config::load(path)?;
        cfg.active_flavor
    } else {
        cli.flavor.into()
    };
    symbols::set_flavor(flavor);

    if cli.repl {
        run_repl()
    } else {
        run_demo();
        Ok(())
    }
}

fn run_demo() {
    for seed in SEEDS {
        match parser::parse(seed) {
            Ok(expr) => {
                let reduced = expr.simplify();
                println!("{seed}\n  => {reduced}");
            }
            Err(e) => println!("{seed}\n  !! {e}"),
        }
    }
}

fn run_repl() -> anyhow::Result<()> {
    use reedline::{DefaultPrompt, Reedline, Signal};

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    while let Signal::Success(buffer) = line_editor.read_line(&prompt)? {
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        match parser::parse(line) {
            Ok(expr) => println!("{}", expr.simplify()),
            Err(e) => println!("error: {e}"),
        }
    }
    Ok(())
}
