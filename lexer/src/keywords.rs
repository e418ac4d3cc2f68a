use model::TokenKind;

/// Reserved words, matched case-sensitively against a whole identifier.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("var", TokenKind::Var),
    ("def", TokenKind::Def),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("return", TokenKind::Return),
    ("print", TokenKind::Print),
    ("int", TokenKind::Int),
    ("real", TokenKind::Real),
    ("bool", TokenKind::Bool),
    ("void", TokenKind::Void),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
];

// Checked before SYMBOLS so `<=` never lexes as `<` `=`.
const TWO_CHAR_OPERATORS: &[((char, char), TokenKind)] = &[
    (('=', '='), TokenKind::EqualEqual),
    (('!', '='), TokenKind::BangEqual),
    (('<', '='), TokenKind::LessEqual),
    (('>', '='), TokenKind::GreaterEqual),
];

const SYMBOLS: &[(char, TokenKind)] = &[
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Star),
    ('/', TokenKind::Slash),
    ('(', TokenKind::OpenParenthesis),
    (')', TokenKind::CloseParenthesis),
    ('{', TokenKind::OpenBrace),
    ('}', TokenKind::CloseBrace),
    (';', TokenKind::Semicolon),
    (':', TokenKind::Colon),
    (',', TokenKind::Comma),
    ('=', TokenKind::Equal),
    ('<', TokenKind::Less),
    ('>', TokenKind::Greater),
];

pub(crate) fn keyword_or_identifier(text: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map_or(TokenKind::Identifier, |(_, kind)| *kind)
}

pub(crate) fn two_char_operator(first: char, second: Option<char>) -> Option<TokenKind> {
    let second = second?;
    TWO_CHAR_OPERATORS
        .iter()
        .find(|(pair, _)| *pair == (first, second))
        .map(|(_, kind)| *kind)
}

pub(crate) fn single_char_symbol(ch: char) -> Option<TokenKind> {
    SYMBOLS.iter().find(|(c, _)| *c == ch).map(|(_, kind)| *kind)
}
