use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rpncalc::{Brain, EvalContext};

/// A reverse-Polish-notation calculator.
///
/// Tokens that parse as numbers are pushed as operands; anything else is
/// treated as an operator symbol (`×`, `÷`, `+`, `−`, `√`, `sin`, `cos`, `π`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log every reduction step (shown with `-vv` or `RUST_LOG=trace`).
    #[arg(long)]
    trace: bool,

    /// Raise log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Tokens to evaluate. Starts an interactive session when empty.
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut brain = Brain::new().with_context(EvalContext::with_trace(args.trace));

    if args.tokens.is_empty() {
        return repl(&mut brain);
    }

    let mut result = None;
    for token in &args.tokens {
        result = feed(&mut brain, token);
    }
    println!("{}", display_value(result));
    Ok(())
}

/// Push one token and return the new result.
fn feed(brain: &mut Brain, token: &str) -> Option<f64> {
    match token.parse::<f64>() {
        Ok(operand) => brain.push_operand(operand),
        Err(_) => brain.perform_operation(alias(token)),
    }
}

/// ASCII spellings for the registry's symbols.
fn alias(token: &str) -> &str {
    match token {
        "pi" => "π",
        "*" | "x" => "×",
        "/" => "÷",
        "-" => "−",
        "sqrt" => "√",
        other => other,
    }
}

fn display_value(result: Option<f64>) -> String {
    result.unwrap_or(0.0).to_string()
}

/// The token sequence, noting anything a reduction leaves behind.
fn describe_stack(brain: &Brain) -> String {
    let reduction = brain.reduce();
    if reduction.is_complete() || brain.stack().is_empty() {
        brain.to_string()
    } else if reduction.result.is_none() {
        format!("{} (missing operands)", brain)
    } else {
        format!("{} ({} left over)", brain, reduction.remaining.len())
    }
}

/// Registered symbols with their arities, e.g. `× binary`.
fn describe_ops(brain: &Brain) -> String {
    let registry = brain.registry();
    registry
        .symbols()
        .filter_map(|symbol| {
            registry
                .arity(symbol)
                .map(|arity| format!("{} {}", symbol, arity))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn repl(brain: &mut Brain) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("rpncalc {} (:ops, :stack, :clear, :quit)", rpncalc::VERSION);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                match line {
                    ":quit" | ":q" => break,
                    ":clear" | ":c" => {
                        brain.clear();
                        println!("0");
                    }
                    ":stack" | ":s" => println!("{}", describe_stack(brain)),
                    ":ops" => println!("{}", describe_ops(brain)),
                    _ => {
                        let mut result = brain.evaluate();
                        for token in line.split_whitespace() {
                            result = feed(brain, token);
                        }
                        let history = brain.update_history();
                        if history.is_empty() {
                            println!("{}", display_value(result));
                        } else {
                            println!("{}    [{}]", display_value(result), history);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
