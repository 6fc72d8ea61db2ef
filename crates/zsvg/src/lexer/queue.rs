//! In-memory token stream over pre-tokenized markup

use std::collections::VecDeque;

use crate::error::Result;
use crate::lexer::token::{Attributes, CloseTag, OpenTag, Token, TokenStream};

/// Token stream backed by a queue of already-produced tokens
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token at the back of the stream
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push_back(token);
        self
    }

    /// Append an element-open token
    pub fn open<'k, I>(&mut self, name: &str, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'k str, &'k str)>,
    {
        let attributes: Attributes = attributes.into_iter().collect();
        self.push(Token::Open(OpenTag::new(name, attributes)))
    }

    /// Append an element-close token
    pub fn close(&mut self, name: &str) -> &mut Self {
        self.push(Token::Close(CloseTag::new(name)))
    }

    /// Tokens not yet pulled
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for TokenQueue {
    fn from(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

impl FromIterator<Token> for TokenQueue {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl TokenStream for TokenQueue {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.tokens.pop_front())
    }
}
