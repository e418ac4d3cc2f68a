mod keywords;
mod state_machine;

use model::{LexError, Token};
use state_machine::StateMachineLexer;

/// Main lexer entry point. The result always ends with exactly one `Eof` token.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = StateMachineLexer::new(input);
    lexer.tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TokenKind;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_var_declaration() {
        let tokens = lex("var x: int = 5;").expect("lexing should succeed");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Var, "var", 1),
                Token::new(TokenKind::Identifier, "x", 1),
                Token::new(TokenKind::Colon, ":", 1),
                Token::new(TokenKind::Int, "int", 1),
                Token::new(TokenKind::Equal, "=", 1),
                Token::new(TokenKind::IntLiteral, "5", 1),
                Token::new(TokenKind::Semicolon, ";", 1),
                Token::new(TokenKind::Eof, "", 1),
            ]
        );
    }

    #[test]
    fn lex_keywords_and_operators() {
        let tokens = lex("if (x == 1) { print x; } else { while (y != 2) {} }").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::If,
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::EqualEqual,
                TokenKind::IntLiteral,
                TokenKind::CloseParenthesis,
                TokenKind::OpenBrace,
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::CloseBrace,
                TokenKind::Else,
                TokenKind::OpenBrace,
                TokenKind::While,
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::BangEqual,
                TokenKind::IntLiteral,
                TokenKind::CloseParenthesis,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::CloseBrace,
                TokenKind::Eof,
            ]
        );
    }

    // ─── Operator tests ─────────────────────────────────────────
    #[test]
    fn lex_two_char_operators_are_greedy() {
        let tokens = lex("<= >= == != < > =").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::EqualEqual,
                TokenKind::BangEqual,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Equal,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[0].lexeme, "<=");
    }

    #[test]
    fn lex_reserved_vocabulary() {
        // Lexed even though no grammar rule consumes them
        let tokens = lex("* / and or not real bool void def return").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::Real,
                TokenKind::Bool,
                TokenKind::Void,
                TokenKind::Def,
                TokenKind::Return,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_adjacent_tokens_no_space() {
        let tokens = lex("f(x+1,2)").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::IntLiteral,
                TokenKind::Comma,
                TokenKind::IntLiteral,
                TokenKind::CloseParenthesis,
                TokenKind::Eof,
            ]
        );
    }

    // ─── Literal tests ──────────────────────────────────────────
    #[test]
    fn lex_number_keeps_digits_verbatim() {
        let tokens = lex("007").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::IntLiteral, "007", 1));
    }

    #[test]
    fn lex_digits_then_letters_split() {
        let tokens = lex("12ab").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::IntLiteral, "12", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "ab", 1));
    }

    #[test]
    fn lex_booleans_and_identifiers() {
        let tokens = lex("true false _tmp1 truex").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    // ─── Error tests ────────────────────────────────────────────
    #[test]
    fn lex_invalid_character_reports_line() {
        let err = lex("var x: int = 1;\nx = 2 @ 3;").unwrap_err();
        assert_eq!(err, LexError { ch: '@', line: 2 });
    }

    #[test]
    fn lex_lone_bang_is_invalid() {
        let err = lex("!x").unwrap_err();
        assert_eq!(err.ch, '!');
        assert_eq!(err.line, 1);
    }

    // ─── Edge case tests ────────────────────────────────────────
    #[test]
    fn lex_empty_input() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", 1)]);
    }

    #[test]
    fn lex_whitespace_only() {
        let tokens = lex("   \t\n  \r\n  ").unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", 3)]);
    }

    #[test]
    fn lex_is_deterministic() {
        let src = "var i: int = 0;\nwhile (i < 10) { i = i + 1; }";
        assert_eq!(lex(src).unwrap(), lex(src).unwrap());
    }
}
