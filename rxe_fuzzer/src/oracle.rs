/**
 * A slow but obviously correct matcher that works on the parse tree directly,
 * used as the reference the automata are compared against.
 */

use std::collections::BTreeSet;
use rxe_regex_parse::{Node, Quantifier};
use crate::rnd::*;

pub fn matches(node: &Node, input: &str) -> bool {
    let input: Vec<char> = input.chars().collect();
    ends(node, &input, 0).contains(&input.len())
}

/// Every position at which a match of `node` starting at `start` can end.
fn ends(node: &Node, input: &[char], start: usize) -> BTreeSet<usize> {
    match node {
        Node::Literal(c) => {
            if input.get(start) == Some(c) {
                Some(start + 1).into_iter().collect()
            }
            else {
                BTreeSet::new()
            }
        },

        Node::Sequence{ first, second } => ends(first, input, start).into_iter()
            .flat_map(|mid| ends(second, input, mid))
            .collect(),

        Node::Alternative{ first, second } => {
            let mut result = ends(first, input, start);
            result.extend(ends(second, input, start));
            result
        },

        Node::Quantified{ subnode, quantifier: Quantifier::Optional } => {
            let mut result = ends(subnode, input, start);
            result.insert(start);
            result
        },

        Node::Quantified{ subnode, quantifier: Quantifier::Star } => {
            let mut result = BTreeSet::new();
            result.insert(start);
            let mut stk = vec![start];
            while let Some(top) = stk.pop() {
                for end in ends(subnode, input, top) {
                    if result.insert(end) {
                        stk.push(end);
                    }
                }
            }
            result
        },
    }
}

/// A random string of the language of `node`.
pub fn witness(node: &Node) -> String {
    let mut result = String::new();
    push_witness(node, &mut result);
    result
}

fn push_witness(node: &Node, out: &mut String) {
    match node {
        Node::Literal(c) => out.push(*c),

        Node::Sequence{ first, second } => {
            push_witness(first, out);
            push_witness(second, out);
        },

        Node::Alternative{ first, second } => {
            push_witness(if one_in(2) { first } else { second }, out);
        },

        Node::Quantified{ subnode, quantifier: Quantifier::Optional } => {
            if one_in(2) {
                push_witness(subnode, out);
            }
        },

        Node::Quantified{ subnode, quantifier: Quantifier::Star } => {
            for _ in 0..in_range(&(0..4)) {
                push_witness(subnode, out);
            }
        },
    }
}
