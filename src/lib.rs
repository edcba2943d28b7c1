//! Evaluate arithmetic expressions like `( 1 + 2 ) * 3 ^ 2`.
//!
//! Solving runs in three passes over whitespace-separated tokens:
//!
//! 1. Lexing classifies each word as a number, operator, or parenthesis, and a resolver pass turns
//!    a `-` in operand position into unary negation.
//! 2. Shunting converts the infix stream to reverse polish notation, using the precedence and
//!    associativity of each operator.
//! 3. Evaluation runs the RPN stream on a stack of `f64`s.
//!
//! ```
//! use shunting_calc::{solve, ErrorKind, Solver};
//!
//! assert_eq!(solve("2 ^ 3 ^ 2").unwrap(), 512.0);
//! assert_eq!(solve("1 / 0").unwrap(), f64::INFINITY);
//! assert_eq!(solve("( 1 + 2").unwrap_err().kind(), ErrorKind::MismatchedParentheses);
//! assert_eq!(Solver::new().to_postfix("- 2 * 3").unwrap().to_string(), "2 ~ 3 *");
//! ```

mod evaluator;
mod lexer;
mod op;
mod resolver;
mod shunter;
mod solve_error;
mod solver;

pub use op::{precedence_of, Assoc, Fixity, Operator, Prec};
pub use solve_error::{ErrorCause, ErrorKind, SolveError, SolveErrorDisplay};
pub use solver::{solve, Postfix, Solver, UnknownTokens};

/// A byte offset into an expression.
pub type Offset = usize;

/// A start and end offset in the expression. The start is inclusive and the end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Offset,
    pub end: Offset,
}

/// The category of a word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Operator),
    OpenParen,
    CloseParen,
    /// Anything else.
    Unknown,
}

/// One word of an expression, as written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme<'s> {
    pub token: Token,
    pub text: &'s str,
    pub span: Span,
}

impl Span {
    pub fn new(start: Offset, end: Offset) -> Span {
        Span { start, end }
    }
}

pub mod implementation {
    pub mod lexer {
        pub use crate::lexer::*;
    }
    pub mod resolver {
        pub use crate::resolver::*;
    }
    pub mod shunter {
        pub use crate::shunter::*;
    }
    pub mod evaluator {
        pub use crate::evaluator::*;
    }
}
