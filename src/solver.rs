use crate::evaluator::evaluate;
use crate::lexer::lex;
use crate::resolver::resolve;
use crate::shunter::shunt;
use crate::solve_error::SolveError;
use crate::{Lexeme, Token};
use std::fmt;
use tracing::{debug, trace};

/// What to do with words that are not numbers, operators, or parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownTokens {
    /// Drop them silently. `1 + foo 2` solves to `3`.
    #[default]
    Ignore,
    /// Fail with a syntax error.
    Reject,
}

/// Solves arithmetic expressions. Holds configuration only; every call starts from scratch, so a
/// `Solver` can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solver {
    unknown_tokens: UnknownTokens,
}

/// An expression converted to reverse polish notation, ready to evaluate. Displays as its tokens
/// separated by spaces, with negation written as `~`.
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix<'s> {
    source: &'s str,
    lexemes: Vec<Lexeme<'s>>,
}

/// Solve `expression` with the default [`Solver`].
pub fn solve(expression: &str) -> Result<f64, SolveError<'_>> {
    Solver::default().solve(expression)
}

impl Solver {
    pub fn new() -> Solver {
        Solver::default()
    }

    /// A solver that rejects unrecognized words instead of ignoring them.
    pub fn strict() -> Solver {
        Solver::new().with_unknown_tokens(UnknownTokens::Reject)
    }

    pub fn with_unknown_tokens(mut self, unknown_tokens: UnknownTokens) -> Solver {
        self.unknown_tokens = unknown_tokens;
        self
    }

    pub fn unknown_tokens(&self) -> UnknownTokens {
        self.unknown_tokens
    }

    /// Evaluate an infix expression whose tokens are separated by whitespace, such as
    /// `( 1 + 2 ) * -3`. Leading and trailing whitespace is ignored.
    pub fn solve<'s>(&self, expression: &'s str) -> Result<f64, SolveError<'s>> {
        let result = self
            .to_postfix(expression)
            .and_then(|postfix| postfix.evaluate());
        match &result {
            Ok(answer) => trace!(expression, answer, "solved"),
            Err(err) => debug!(expression, cause = %err.cause(), "failed to solve"),
        }
        result
    }

    /// Convert an infix expression to reverse polish notation without evaluating it.
    pub fn to_postfix<'s>(&self, expression: &'s str) -> Result<Postfix<'s>, SolveError<'s>> {
        let source = expression.trim();

        let lexemes = lex(source);
        trace!(lexemes = %Stream(&lexemes), "lexed");
        let lexemes =
            resolve(lexemes).map_err(|err| SolveError::from_resolver_error(source, err))?;
        trace!(lexemes = %Stream(&lexemes), "resolved");
        let lexemes = shunt(lexemes, self.unknown_tokens)
            .map_err(|err| SolveError::from_shunt_error(source, err))?;
        trace!(lexemes = %Stream(&lexemes), "shunted");

        Ok(Postfix { source, lexemes })
    }
}

impl<'s> Postfix<'s> {
    pub fn evaluate(&self) -> Result<f64, SolveError<'s>> {
        evaluate(&self.lexemes).map_err(|err| SolveError::from_eval_error(self.source, err))
    }

    /// The trimmed expression this was converted from.
    pub fn expression(&self) -> &'s str {
        self.source
    }

    pub fn lexemes(&self) -> &[Lexeme<'s>] {
        &self.lexemes
    }
}

impl<'s> fmt::Display for Postfix<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Stream(&self.lexemes))
    }
}

struct Stream<'a, 's>(&'a [Lexeme<'s>]);

impl<'a, 's> fmt::Display for Stream<'a, 's> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, lexeme) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            match lexeme.token {
                Token::Op(op) => write!(f, "{}", op)?,
                _ => write!(f, "{}", lexeme.text)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve_error::{ErrorCause, ErrorKind};

    #[test]
    fn test_to_postfix() {
        let solver = Solver::new();
        let show = |src| solver.to_postfix(src).unwrap().to_string();
        assert_eq!(show("2 ^ 3 ^ 2"), "2 3 2 ^ ^");
        assert_eq!(show("  ( 1 + 2 ) * 3  "), "1 2 + 3 *");
        assert_eq!(show("- 4 + 1"), "4 ~ 1 +");
        assert_eq!(show("1 + foo 2"), "1 2 +");
        assert_eq!(show(""), "");
    }

    #[test]
    fn test_postfix_source_is_trimmed() {
        let postfix = Solver::new().to_postfix("\t 1 + 2 \n").unwrap();
        assert_eq!(postfix.expression(), "1 + 2");
        assert_eq!(postfix.lexemes().len(), 3);
        assert_eq!(postfix.evaluate().unwrap(), 3.0);
    }

    #[test]
    fn test_strict() {
        assert_eq!(Solver::default().unknown_tokens(), UnknownTokens::Ignore);
        assert_eq!(Solver::strict().unknown_tokens(), UnknownTokens::Reject);

        assert_eq!(Solver::new().solve("1 + foo 2"), Ok(3.0));
        let err = Solver::strict().solve("1 + foo 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.cause(), &ErrorCause::UnrecognizedToken("foo"));
        assert_eq!(err.span().map(|span| span.start), Some(4));
    }
}
