use crate::solver::UnknownTokens;
use crate::{Lexeme, Token};

/// Ways the conversion to RPN can fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShuntError<'s> {
    /// A `)` with no `(` before it.
    UnmatchedClose(Lexeme<'s>),
    /// A `(` that is never closed.
    UnclosedOpen(Lexeme<'s>),
    /// A word that is not a number, operator, or parenthesis, under [`UnknownTokens::Reject`].
    UnrecognizedToken(Lexeme<'s>),
}

/// Convert an infix token stream into reverse polish notation. For example, `1 * 2 + 3 * 4` would
/// become `1 2 * 3 4 * +`.
///
/// The output contains only numbers and operators; parentheses are consumed. Unknown words are
/// dropped or rejected depending on `unknown_tokens`.
pub fn shunt<'s>(
    lexemes: impl IntoIterator<Item = Lexeme<'s>>,
    unknown_tokens: UnknownTokens,
) -> Result<Vec<Lexeme<'s>>, ShuntError<'s>> {
    // Holds operators and open parens only.
    let mut stack = Vec::<Lexeme>::new();
    let mut output = Vec::<Lexeme>::new();
    for lexeme in lexemes {
        match lexeme.token {
            Token::Number(_) => output.push(lexeme),
            Token::Op(op) => {
                while let Some(top) = stack.last().copied() {
                    match top.token {
                        Token::Op(top_op) if top_op.yields_to(op) => {
                            stack.pop();
                            output.push(top);
                        }
                        _ => break,
                    }
                }
                stack.push(lexeme);
            }
            Token::OpenParen => stack.push(lexeme),
            Token::CloseParen => loop {
                match stack.pop() {
                    None => return Err(ShuntError::UnmatchedClose(lexeme)),
                    Some(top) if top.token == Token::OpenParen => break,
                    Some(top) => output.push(top),
                }
            },
            Token::Unknown => match unknown_tokens {
                UnknownTokens::Ignore => (),
                UnknownTokens::Reject => return Err(ShuntError::UnrecognizedToken(lexeme)),
            },
        }
    }
    while let Some(top) = stack.pop() {
        if top.token == Token::OpenParen {
            return Err(ShuntError::UnclosedOpen(top));
        }
        output.push(top);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::resolver::resolve;

    fn show_stream(stream: &[Lexeme]) -> String {
        stream
            .iter()
            .map(|lexeme| match lexeme.token {
                Token::Op(op) => op.symbol(),
                _ => lexeme.text,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[track_caller]
    fn assert_shunt(src: &str, expected: &str) {
        let lexemes = shunt(resolve(lex(src)).unwrap(), UnknownTokens::Ignore).unwrap();
        assert_eq!(show_stream(&lexemes), expected);
    }

    #[test]
    fn test_shunting() {
        assert_shunt("", "");
        assert_shunt("1", "1");
        assert_shunt("1 + 2", "1 2 +");
        assert_shunt("1 * 2 + 3 * 4", "1 2 * 3 4 * +");
        assert_shunt("1 - 2 - 3", "1 2 - 3 -");
        assert_shunt("1 - 2 + 3", "1 2 - 3 +");
        assert_shunt("8 / 4 * 2", "8 4 / 2 *");
        assert_shunt("2 ^ 3 ^ 2", "2 3 2 ^ ^");
        assert_shunt("( 1 + 2 ) * 3", "1 2 + 3 *");
        assert_shunt("1 + 2 * 3 ^ 4 - 5", "1 2 3 4 ^ * + 5 -");
        assert_shunt("( ( 1 ) )", "1");
    }

    #[test]
    fn test_shunting_negation() {
        assert_shunt("- 2", "2 ~");
        assert_shunt("- 2 ^ 2", "2 ~ 2 ^");
        assert_shunt("2 ^ - 3", "2 3 ~ ^");
        assert_shunt("- - 2 + 1", "2 ~ ~ 1 +");
        assert_shunt("- ( 1 + 2 )", "1 2 + ~");
        assert_shunt("( -3 ) * 2", "-3 2 *");
    }

    #[test]
    fn test_shunting_unknown() {
        assert_shunt("1 + foo 2", "1 2 +");
        assert_shunt("1 % 2", "1 2");

        let lexemes = resolve(lex("1 + foo 2")).unwrap();
        let err = shunt(lexemes, UnknownTokens::Reject).unwrap_err();
        match err {
            ShuntError::UnrecognizedToken(lexeme) => assert_eq!(lexeme.text, "foo"),
            _ => panic!("wrong error: {:?}", err),
        }
    }

    #[test]
    fn test_shunting_mismatched() {
        let err = shunt(lex("1 + 2 )"), UnknownTokens::Ignore).unwrap_err();
        match err {
            ShuntError::UnmatchedClose(lexeme) => assert_eq!(lexeme.span.start, 6),
            _ => panic!("wrong error: {:?}", err),
        }

        let err = shunt(lex("( ( 1 + 2 )"), UnknownTokens::Ignore).unwrap_err();
        match err {
            ShuntError::UnclosedOpen(lexeme) => assert_eq!(lexeme.span.start, 0),
            _ => panic!("wrong error: {:?}", err),
        }

        assert!(shunt(lex(")"), UnknownTokens::Ignore).is_err());
        assert!(shunt(lex(") ("), UnknownTokens::Ignore).is_err());
    }
}
