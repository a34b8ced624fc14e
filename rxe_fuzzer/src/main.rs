extern crate rxe_regex_parse;
extern crate rxe_dense_fsa;
extern crate rand;

mod rnd;
mod str_gen;
mod pattern_gen;
mod oracle;

use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, info};
use rxe_dense_fsa::{dfa, nfa};
use str_gen::*;
use pattern_gen::*;

/// Symbols patterns are built from.
const PATTERN_CHARSET: &str = "abc";
/// Symbols inputs are built from. `d` never appears in a pattern.
const INPUT_CHARSET: &str = "abcd";

/// Compiles random patterns and checks the DFA and the NFA against a
/// reference matcher on random inputs.
#[derive(Parser, Debug)]
#[command(name = "rxe_fuzzer")]
struct Args {
    /// Seed of the generator, defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Number of patterns to generate
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Nesting limit of the generated patterns
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Length limit of the random inputs
    #[arg(long, default_value_t = 8)]
    max_input_len: usize,

    /// Inputs tried per pattern
    #[arg(long, default_value_t = 32)]
    inputs_per_pattern: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = rnd::reseed(args.seed.unwrap_or_else(rnd::seed_from_system_time));
    info!("fuzzing with seed {}", seed);

    let patterns = RandomPatternGenerator::with_depth_and_charset(args.max_depth, PATTERN_CHARSET);
    for iteration in 0..args.iterations {
        let pattern = patterns.generate();
        let ast = rxe_regex_parse::parse(&pattern)
            .with_context(|| format!("generated pattern {:?} does not parse (seed {})", pattern, seed))?;
        let nf = nfa::Automaton::from(ast.as_ref());
        let df = dfa::Automaton::from(&nf);
        debug!("#{} {:?}: {} NFA states, {} DFA states", iteration, pattern, nf.size(), df.state_count());

        let witnesses = (0..args.inputs_per_pattern / 2).map(|_| oracle::witness(&ast)).collect();
        let inputs = MixedStringGenerator::new(
            witnesses,
            RandomStringGenerator::with_len_and_charset(0..(args.max_input_len + 1), INPUT_CHARSET));

        for _ in 0..args.inputs_per_pattern {
            let input = inputs.generate();
            let expected = oracle::matches(&ast, &input);
            let by_nfa = nf.accepts(&input);
            let by_dfa = df.is_match(&input);
            if by_nfa != expected || by_dfa != expected {
                bail!("pattern {:?} on input {:?}: reference {}, NFA {}, DFA {} (seed {})",
                    pattern, input, expected, by_nfa, by_dfa, seed);
            }
        }
    }

    println!("{} patterns passed (seed {})", args.iterations, seed);
    Ok(())
}
