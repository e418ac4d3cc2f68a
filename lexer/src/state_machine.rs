use model::{LexError, Token, TokenKind};
use crate::keywords::{keyword_or_identifier, single_char_symbol, two_char_operator};

pub struct StateMachineLexer {
    input: Vec<char>,
    pos: usize,
    line: usize,
    token_start: usize,
}

impl StateMachineLexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            line: 1,
            token_start: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            match self.lex_next_token()? {
                Some(token) => tokens.push(token),
                None => continue, // Trailing whitespace consumed
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        Ok(tokens)
    }

    fn lex_next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        if self.pos >= self.input.len() {
            return Ok(None);
        }

        self.token_start = self.pos;
        let ch = self.current_char();

        match ch {
            '0'..='9' => Ok(Some(self.lex_number())),
            c if c.is_alphabetic() || c == '_' => Ok(Some(self.lex_identifier())),
            _ => self.lex_operator_or_punctuation().map(Some),
        }
    }

    fn current_char(&self) -> char {
        self.input[self.pos]
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn current_slice(&self) -> String {
        self.input[self.token_start..self.pos].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.current_char().is_whitespace() {
            if self.current_char() == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn lex_number(&mut self) -> Token {
        while self.pos < self.input.len() && self.current_char().is_ascii_digit() {
            self.pos += 1;
        }
        Token::new(TokenKind::IntLiteral, self.current_slice(), self.line)
    }

    fn lex_identifier(&mut self) -> Token {
        while self.pos < self.input.len() {
            match self.current_char() {
                c if c.is_alphanumeric() || c == '_' => self.pos += 1,
                _ => break,
            }
        }

        let text = self.current_slice();
        Token::new(keyword_or_identifier(&text), text, self.line)
    }

    fn lex_operator_or_punctuation(&mut self) -> Result<Token, LexError> {
        let ch = self.current_char();

        if let Some(kind) = two_char_operator(ch, self.peek(1)) {
            self.pos += 2;
            return Ok(Token::new(kind, self.current_slice(), self.line));
        }

        match single_char_symbol(ch) {
            Some(kind) => {
                self.pos += 1;
                Ok(Token::new(kind, ch.to_string(), self.line))
            }
            None => Err(LexError { ch, line: self.line }),
        }
    }
}
