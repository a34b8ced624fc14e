/**
 * Human readable dumps of the intermediate results.
 */

use std::fmt;
use rxe_dense_fsa::{dfa, nfa};
use rxe_regex_parse::Node;

const TREE_INDENT: usize = 8;

/// Pre-order, one node per line, children indented below their parent.
pub struct Tree<'a>(pub &'a Node);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 1)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, offset: usize) -> fmt::Result {
    writeln!(f, "{:width$}{}", "", node.label(), width = offset)?;
    for child in node.children() {
        write_node(f, child, offset + TREE_INDENT)?;
    }
    Ok(())
}

pub struct Nfa<'a>(pub &'a nfa::Automaton);

impl fmt::Display for Nfa<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nf = self.0;
        writeln!(f, "This NFA has {} states: 0 - {}", nf.size(), nf.size() - 1)?;
        writeln!(f, "The initial state is {}", nf.initial().id())?;
        writeln!(f, "The final state is {}", nf.final_state().id())?;
        writeln!(f)?;

        for from in nf.states() {
            for (on, to) in nf.transitions_from(from) {
                write!(f, "Transition from {} to {} on input ", from.id(), to.id())?;
                match on {
                    nfa::Label::Epsilon => writeln!(f, "Epsilon")?,
                    nfa::Label::Symbol(c) => writeln!(f, "{}", c)?,
                }
            }
        }
        Ok(())
    }
}

pub struct Dfa<'a>(pub &'a dfa::Automaton);

impl fmt::Display for Dfa<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let df = self.0;
        writeln!(f, "DFA start state: {}", df.start().id())?;
        write!(f, "DFA final state(s):")?;
        for state in df.accepting_states() {
            write!(f, " {}", state.id())?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for (from, on, to) in df.transitions() {
            writeln!(f, "Trans[{}, {}] = {}", from.id(), on, to.id())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_is_indented_by_depth() {
        let ast = rxe_regex_parse::parse("a|b*").unwrap();
        let expected = concat!(
            " |\n",
            "         a\n",
            "         *\n",
            "                 b\n",
        );
        assert_eq!(Tree(&ast).to_string(), expected);
    }

    #[test]
    fn nfa_lists_every_transition() {
        let nf = nfa::Automaton::basic('a').star();
        let expected = concat!(
            "This NFA has 4 states: 0 - 3\n",
            "The initial state is 0\n",
            "The final state is 3\n",
            "\n",
            "Transition from 0 to 1 on input Epsilon\n",
            "Transition from 0 to 3 on input Epsilon\n",
            "Transition from 1 to 2 on input a\n",
            "Transition from 2 to 0 on input Epsilon\n",
            "Transition from 2 to 3 on input Epsilon\n",
        );
        assert_eq!(Nfa(&nf).to_string(), expected);
    }

    #[test]
    fn dfa_lists_sorted_transitions() {
        let df = rxe_dense_fsa::compile("ab").unwrap();
        let expected = concat!(
            "DFA start state: 0\n",
            "DFA final state(s): 2\n",
            "\n",
            "Trans[0, a] = 1\n",
            "Trans[1, b] = 2\n",
        );
        assert_eq!(Dfa(&df).to_string(), expected);
    }
}
