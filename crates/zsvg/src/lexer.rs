//! Markup tokenization: the token model, the stream seam and its sources

pub mod cursor;
pub mod queue;
pub mod token;
pub mod xml;

pub use cursor::Cursor;
pub use queue::TokenQueue;
pub use token::{Attributes, CloseTag, OpenTag, Token, TokenStream};
pub use xml::XmlTokens;
