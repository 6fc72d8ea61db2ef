//! Token stream over raw markup bytes, backed by `quick-xml`

use std::borrow::Cow;
use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::error::{Error, ErrorKind, Result, Span};
use crate::lexer::cursor::Cursor;
use crate::lexer::token::{Attributes, CloseTag, OpenTag, Token, TokenStream};

/// Pull tokenizer over a markup document.
///
/// Element and attribute names are reduced to their local part, attribute
/// values are unescaped, and a self-closing tag yields an open token
/// immediately followed by its close token.
pub struct XmlTokens<'a> {
    reader: Reader<&'a [u8]>,
    cursor: Cursor<'a>,
    pending: Option<Token>,
    finished: bool,
}

impl fmt::Debug for XmlTokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlTokens")
            .field("position", &self.cursor.position())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a> XmlTokens<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.check_end_names(true);
        reader.trim_text(false);
        Self {
            reader,
            cursor: Cursor::new(input),
            pending: None,
            finished: false,
        }
    }

    fn span_from(&mut self, start: usize) -> Span {
        let start = self.cursor.locate(start);
        let end = self.cursor.locate(self.reader.buffer_position());
        Span::new(start, end)
    }

    fn malformed(&mut self, start: usize, reason: impl fmt::Display) -> Error {
        self.finished = true;
        self.pending = None;
        let span = self.span_from(start);
        Error::with_message(
            ErrorKind::MalformedTokenStream,
            span,
            format!("malformed markup: {reason}"),
        )
    }

    fn open_tag(&mut self, start_tag: &BytesStart<'_>, start: usize) -> Result<OpenTag> {
        let name = lossy(start_tag.local_name().as_ref());
        let mut attributes = Attributes::new();
        for attr in start_tag.attributes() {
            let attr = attr.map_err(|err| self.malformed(start, err))?;
            let key = lossy(attr.key.local_name().as_ref());
            let value = attr
                .unescape_value()
                .map_err(|err| self.malformed(start, err))?;
            attributes.insert(key, value.into_owned());
        }
        let span = self.span_from(start);
        Ok(OpenTag::new(name, attributes).with_span(span))
    }
}

impl TokenStream for XmlTokens<'_> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(token));
        }
        if self.finished {
            return Ok(None);
        }

        let start = self.reader.buffer_position();
        let event = match self.reader.read_event() {
            Ok(event) => event,
            Err(err) => return Err(self.malformed(start, err)),
        };

        let token = match event {
            Event::Start(tag) => Token::Open(self.open_tag(&tag, start)?),
            Event::Empty(tag) => {
                let open = self.open_tag(&tag, start)?;
                self.pending = Some(Token::Close(
                    CloseTag::new(open.name.clone()).with_span(open.span),
                ));
                Token::Open(open)
            }
            Event::End(tag) => {
                let name = lossy(tag.local_name().as_ref());
                let span = self.span_from(start);
                Token::Close(CloseTag::new(name).with_span(span))
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|err| self.malformed(start, err))?
                    .into_owned();
                Token::Text(text)
            }
            Event::Comment(text) => Token::Comment(lossy(&text)),
            pi @ Event::PI(_) => Token::ProcessingInstruction(lossy(&pi)),
            decl @ Event::Decl(_) => Token::Declaration(lossy(&decl)),
            Event::Eof => {
                self.finished = true;
                return Ok(None);
            }
            other => Token::Other(lossy(&other)),
        };

        trace!(token = token.name(), offset = start, "markup token");
        Ok(Some(token))
    }
}

fn lossy(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
