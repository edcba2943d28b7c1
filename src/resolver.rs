use crate::op::{Fixity, Operator};
use crate::{Lexeme, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolverError<'s> {
    /// A prefix operator, such as `~`, written after an operand instead of before one.
    MisplacedPrefix(Lexeme<'s>),
}

/// Disambiguate unary from binary minus. A `-` that appears where an operand is expected (at the
/// start, after `(`, or after another operator) is rewritten to [`Operator::Neg`]. A prefix
/// operator anywhere else is an error. Everything else passes through untouched.
///
/// Unknown words don't change what's expected next, since the converter skips them.
pub fn resolve<'s>(
    input: impl IntoIterator<Item = Lexeme<'s>>,
) -> Result<Vec<Lexeme<'s>>, ResolverError<'s>> {
    let mut arg_mode = true;
    let mut output = vec![];
    for mut lexeme in input {
        match lexeme.token {
            Token::Number(_) | Token::CloseParen => arg_mode = false,
            Token::OpenParen => arg_mode = true,
            Token::Op(Operator::Sub) if arg_mode => lexeme.token = Token::Op(Operator::Neg),
            Token::Op(op) if op.fixity() == Fixity::Prefix && !arg_mode => {
                return Err(ResolverError::MisplacedPrefix(lexeme))
            }
            Token::Op(_) => arg_mode = true,
            Token::Unknown => (),
        }
        output.push(lexeme);
    }
    Ok(output)
}
