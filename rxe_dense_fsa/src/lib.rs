extern crate rxe_regex_parse;

pub mod nfa;
pub mod dfa;

pub use dfa::Outcome;
pub use rxe_regex_parse::ParseError;

/// Parses `pattern`, builds its NFA with Thompson's construction and
/// determinizes it. The parse tree and the NFA are dropped on the way, only
/// the DFA is returned.
pub fn compile(pattern: &str) -> Result<dfa::Automaton, ParseError> {
    let ast = rxe_regex_parse::parse(pattern)?;
    let nf = nfa::Automaton::from(ast.as_ref());
    Ok(dfa::Automaton::from(nf))
}

#[test]
fn identifier_like() {
    let rx = r"(a|b|c)(a|b|c|0|1)*";
    let df = compile(rx).unwrap();
    assert!(df.is_match("a"));
    assert!(df.is_match("ab01c"));
    assert!(!df.is_match("0a"));
    assert!(!df.is_match(""));
}
