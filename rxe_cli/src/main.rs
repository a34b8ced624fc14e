extern crate rxe_regex_parse;
extern crate rxe_dense_fsa;

mod show;

use anyhow::Context;
use clap::Parser;
use log::info;
use rxe_dense_fsa::{dfa, nfa};

/// Compiles PATTERN into a DFA and tells whether INPUT matches it.
#[derive(Parser, Debug)]
#[command(name = "rxe", version)]
struct Args {
    /// ASCII letters and digits combined with `(`, `)`, `|`, `*` and `?`
    pattern: String,

    /// The string to match
    input: String,

    /// Print the parse tree
    #[arg(long)]
    tree: bool,

    /// Print the NFA built by Thompson's construction
    #[arg(long)]
    nfa: bool,

    /// Print the DFA built by the subset construction
    #[arg(long)]
    dfa: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ast = rxe_regex_parse::parse(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;
    if args.tree {
        println!("{}", show::Tree(&ast));
    }

    let nf = nfa::Automaton::from(ast.as_ref());
    if args.nfa {
        println!("{}", show::Nfa(&nf));
    }

    let df = dfa::Automaton::from(nf);
    if args.dfa {
        println!("{}", show::Dfa(&df));
    }

    let outcome = df.simulate(&args.input);
    info!("{:?} on {:?}: {}", args.pattern, args.input, outcome);
    println!("Result: {}", outcome);
    Ok(())
}
