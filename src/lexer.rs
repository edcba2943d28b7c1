use crate::op::Operator;
use crate::{Lexeme, Span, Token};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One whitespace-delimited word.
    static ref WORD: Regex = Regex::new(r"\S+").unwrap();

    /// A decimal literal: optional sign, optional fraction, optional exponent.
    static ref NUMBER: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap();
}

/// Split `source` on whitespace and classify each word. Never fails: words that are not numbers,
/// operators, or parentheses become [`Token::Unknown`].
pub fn lex(source: &str) -> Vec<Lexeme<'_>> {
    WORD.find_iter(source)
        .map(|word| Lexeme {
            token: classify(word.as_str()),
            text: word.as_str(),
            span: Span::new(word.start(), word.end()),
        })
        .collect()
}

fn classify(word: &str) -> Token {
    if NUMBER.is_match(word) {
        // The regex only admits strings that `f64` knows how to parse.
        return match word.parse::<f64>() {
            Ok(n) => Token::Number(n),
            Err(_) => Token::Unknown,
        };
    }
    match word {
        "(" => Token::OpenParen,
        ")" => Token::CloseParen,
        _ => match Operator::from_symbol(word) {
            Some(op) => Token::Op(op),
            None => Token::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        lex(source).into_iter().map(|lexeme| lexeme.token).collect()
    }

    #[test]
    fn test_lexing() {
        use Operator::*;
        use Token::*;

        assert_eq!(
            tokens("( -1 + 2.5 ) * 3 / 4 ^ .5"),
            vec![
                OpenParen,
                Number(-1.0),
                Op(Add),
                Number(2.5),
                CloseParen,
                Op(Mul),
                Number(3.0),
                Op(Div),
                Number(4.0),
                Op(Pow),
                Number(0.5),
            ]
        );
        assert_eq!(tokens("- ~ -"), vec![Op(Sub), Op(Neg), Op(Sub)]);
        assert_eq!(tokens(""), vec![]);
        assert_eq!(tokens("   "), vec![]);
    }

    #[test]
    fn test_numbers() {
        use Token::*;

        assert_eq!(tokens("7."), vec![Number(7.0)]);
        assert_eq!(tokens("+7"), vec![Number(7.0)]);
        assert_eq!(tokens("1e3"), vec![Number(1000.0)]);
        assert_eq!(tokens("2.5E-1"), vec![Number(0.25)]);
        assert_eq!(tokens("-0"), vec![Number(-0.0)]);
    }

    #[test]
    fn test_unknown_words() {
        use Token::*;

        assert_eq!(
            tokens("inf NaN 0x10 1.2.3 . e5 %"),
            vec![Unknown, Unknown, Unknown, Unknown, Unknown, Unknown, Unknown]
        );
        // Words are whitespace-delimited, so glued symbols don't split.
        assert_eq!(tokens("1+2"), vec![Unknown]);
        assert_eq!(tokens("(1"), vec![Unknown]);
    }

    #[test]
    fn test_spans() {
        let lexemes = lex("  12 +\t3  ");
        let spans = lexemes
            .iter()
            .map(|lexeme| (lexeme.text, lexeme.span.start, lexeme.span.end))
            .collect::<Vec<_>>();
        assert_eq!(spans, vec![("12", 2, 4), ("+", 5, 6), ("3", 7, 8)]);
    }
}
