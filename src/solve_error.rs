use crate::evaluator::EvalError;
use crate::op::Operator;
use crate::resolver::ResolverError;
use crate::shunter::ShuntError;
use crate::{Span, Token};
use colored::Colorize;
use std::error;
use std::fmt;
use thiserror::Error;

/// An error from solving an expression. Borrows the expression, so that it can be displayed with
/// the offending token underlined.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveError<'s> {
    source: &'s str,
    cause: ErrorCause<'s>,
    span: Option<Span>,
}

/// The two broad categories of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MismatchedParentheses,
    Syntax,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErrorCause<'s> {
    #[error("')' has no matching '('.")]
    UnmatchedClose,
    #[error("'(' is never closed.")]
    UnclosedOpen,
    #[error("Unrecognized token '{0}'.")]
    UnrecognizedToken(&'s str),
    #[error("Insufficient operands for '{0}'.")]
    InsufficientOperands(Operator),
    #[error("Unsupported operator '{0}'.")]
    UnsupportedOperator(&'s str),
    #[error("Prefix operator '{0}' follows an operand.")]
    MisplacedPrefix(Operator),
    #[error("Malformed expression: {0} values remain.")]
    MalformedExpression(usize),
    #[error("Empty expression.")]
    EmptyExpression,
}

impl<'s> ErrorCause<'s> {
    pub fn kind(&self) -> ErrorKind {
        use ErrorCause::*;

        match self {
            UnmatchedClose | UnclosedOpen => ErrorKind::MismatchedParentheses,
            UnrecognizedToken(_)
            | InsufficientOperands(_)
            | UnsupportedOperator(_)
            | MisplacedPrefix(_)
            | MalformedExpression(_)
            | EmptyExpression => ErrorKind::Syntax,
        }
    }

    fn label(&self) -> &'static str {
        use ErrorCause::*;

        match self {
            UnmatchedClose => "unmatched",
            UnclosedOpen => "unclosed",
            UnrecognizedToken(_) => "unrecognized token",
            InsufficientOperands(op) if op.arity() == 1 => "needs an operand",
            InsufficientOperands(_) => "needs two operands",
            UnsupportedOperator(_) => "unsupported",
            MisplacedPrefix(_) => "must come before its operand",
            MalformedExpression(_) | EmptyExpression => "",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::MismatchedParentheses => write!(f, "Mismatched Parentheses Error"),
            ErrorKind::Syntax => write!(f, "Syntax Error"),
        }
    }
}

impl<'s> SolveError<'s> {
    pub(crate) fn new(
        source: &'s str,
        cause: ErrorCause<'s>,
        span: Option<Span>,
    ) -> SolveError<'s> {
        SolveError {
            source,
            cause,
            span,
        }
    }

    pub(crate) fn from_resolver_error(
        source: &'s str,
        error: ResolverError<'s>,
    ) -> SolveError<'s> {
        match error {
            ResolverError::MisplacedPrefix(lexeme) => {
                let cause = match lexeme.token {
                    Token::Op(op) => ErrorCause::MisplacedPrefix(op),
                    _ => ErrorCause::UnsupportedOperator(lexeme.text),
                };
                SolveError::new(source, cause, Some(lexeme.span))
            }
        }
    }

    pub(crate) fn from_shunt_error(source: &'s str, error: ShuntError<'s>) -> SolveError<'s> {
        match error {
            ShuntError::UnmatchedClose(lexeme) => {
                SolveError::new(source, ErrorCause::UnmatchedClose, Some(lexeme.span))
            }
            ShuntError::UnclosedOpen(lexeme) => {
                SolveError::new(source, ErrorCause::UnclosedOpen, Some(lexeme.span))
            }
            ShuntError::UnrecognizedToken(lexeme) => SolveError::new(
                source,
                ErrorCause::UnrecognizedToken(lexeme.text),
                Some(lexeme.span),
            ),
        }
    }

    pub(crate) fn from_eval_error(source: &'s str, error: EvalError<'s>) -> SolveError<'s> {
        match error {
            EvalError::InsufficientOperands { op, lexeme } => SolveError::new(
                source,
                ErrorCause::InsufficientOperands(op),
                Some(lexeme.span),
            ),
            EvalError::UnsupportedOperator(lexeme) => SolveError::new(
                source,
                ErrorCause::UnsupportedOperator(lexeme.text),
                Some(lexeme.span),
            ),
            EvalError::MalformedExpression(count) => {
                SolveError::new(source, ErrorCause::MalformedExpression(count), None)
            }
            EvalError::EmptyExpression => {
                SolveError::new(source, ErrorCause::EmptyExpression, None)
            }
        }
    }

    /// The expression that failed to solve (after trimming).
    pub fn expression(&self) -> &'s str {
        self.source
    }

    pub fn cause(&self) -> &ErrorCause<'s> {
        &self.cause
    }

    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }

    /// Where in [`expression`](SolveError::expression) the error was found, if it can be pinned
    /// on a single token.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Display the error, with or without terminal colors. Plain `Display` uses colors.
    pub fn display_with_color_override<'e>(&'e self, color: bool) -> SolveErrorDisplay<'e, 's> {
        SolveErrorDisplay { error: self, color }
    }
}

/// Returned by [`SolveError::display_with_color_override`].
pub struct SolveErrorDisplay<'e, 's> {
    error: &'e SolveError<'s>,
    color: bool,
}

impl<'e, 's> fmt::Display for SolveErrorDisplay<'e, 's> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error = self.error;
        let kind = error.kind().to_string();
        if self.color {
            writeln!(f, "{}: {}", kind.red().bold(), error.cause)?;
        } else {
            writeln!(f, "{}: {}", kind, error.cause)?;
        }

        let span = match error.span {
            Some(span) => span,
            None => return Ok(()),
        };
        let offset = error.source[..span.start].chars().count();
        let len = error.source[span.start..span.end].chars().count().max(1);
        let underline = format!(
            "{}{} {}",
            " ".repeat(offset),
            "^".repeat(len),
            error.cause.label()
        );
        writeln!(f, "  |")?;
        writeln!(f, "  | {}", error.source)?;
        if self.color {
            writeln!(f, "  | {}", underline.red().bold())
        } else {
            writeln!(f, "  | {}", underline)
        }
    }
}

impl<'s> fmt::Display for SolveError<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_with_color_override(true))
    }
}

impl<'s> error::Error for SolveError<'s> {}
