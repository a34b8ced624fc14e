/**
 * All of the regex syntax-tree (AST) data-structures.
 */

/// A node of the parse tree. Every node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Alternative{
        first: Box<Node>,
        second: Box<Node>,
    },

    Sequence{
        first: Box<Node>,
        second: Box<Node>,
    },

    Quantified{
        subnode: Box<Node>,
        quantifier: Quantifier,
    },

    Literal(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `*`, zero or more repetitions.
    Star,
    /// `?`, zero or one occurrence.
    Optional,
}

impl Quantifier {
    pub fn symbol(self) -> char {
        match self {
            Quantifier::Star => '*',
            Quantifier::Optional => '?',
        }
    }
}

impl Node {
    /// The direct children of this node, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Alternative{ first, second } | Node::Sequence{ first, second } =>
                vec![first.as_ref(), second.as_ref()],

            Node::Quantified{ subnode, .. } => vec![subnode.as_ref()],

            Node::Literal(_) => Vec::new(),
        }
    }

    /// The operator character of this node (`|`, `.`, `*`, `?`) or the literal itself.
    pub fn label(&self) -> char {
        match self {
            Node::Alternative{ .. } => '|',
            Node::Sequence{ .. } => '.',
            Node::Quantified{ quantifier, .. } => quantifier.symbol(),
            Node::Literal(c) => *c,
        }
    }
}
