/**
 * Parsing of the pattern dialect: literal alphanumerics, grouping,
 * alternation, Kleene star, optional and implicit concatenation.
 */

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{Node, Quantifier};
pub use error::ParseError;
pub use parser::parse;
