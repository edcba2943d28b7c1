use crate::op::{Fixity, Operator};
use crate::{Lexeme, Token};

/// Ways evaluating an RPN stream can fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalError<'s> {
    /// The operator needed more values than were on the stack.
    InsufficientOperands { op: Operator, lexeme: Lexeme<'s> },
    /// A token that isn't a number or operator, such as a stray parenthesis.
    UnsupportedOperator(Lexeme<'s>),
    /// More than one value was left over. Holds how many.
    MalformedExpression(usize),
    /// There was nothing to evaluate.
    EmptyExpression,
}

/// Evaluate a stream in reverse polish notation, such as the output of
/// [`shunt`](crate::implementation::shunter::shunt).
///
/// Arithmetic is plain `f64`: dividing by zero gives an infinity or NaN, not an error.
pub fn evaluate<'s>(lexemes: &[Lexeme<'s>]) -> Result<f64, EvalError<'s>> {
    let mut stack = Vec::<f64>::new();
    for lexeme in lexemes {
        let op = match lexeme.token {
            Token::Number(n) => {
                stack.push(n);
                continue;
            }
            Token::Op(op) => op,
            _ => return Err(EvalError::UnsupportedOperator(*lexeme)),
        };
        // Popped in reverse push order: the right operand comes off first.
        let result = match op.fixity() {
            Fixity::Prefix => stack.pop().and_then(|arg| op.apply_unary(arg)),
            Fixity::Infix => match (stack.pop(), stack.pop()) {
                (Some(right), Some(left)) => op.apply(left, right),
                _ => None,
            },
        };
        match result {
            Some(value) => stack.push(value),
            None => {
                return Err(EvalError::InsufficientOperands {
                    op,
                    lexeme: *lexeme,
                })
            }
        }
    }
    match stack.as_slice() {
        [] => Err(EvalError::EmptyExpression),
        [result] => Ok(*result),
        values => Err(EvalError::MalformedExpression(values.len())),
    }
}
