use iris_das_domain::{DomainStatus, LookupResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

const DOMAIN: &[u8] = b"domain";
const DOMAIN_NAME: &[u8] = b"domainName";
const STATUS: &[u8] = b"status";

#[derive(Debug, thiserror::Error)]
pub enum ReplyParseError {
    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("Reply contains no <domain> element")]
    NoDomainElement,

    #[error("Reply ends inside an open element")]
    Unterminated,
}

/// The parts of a `<domain>` reply that matter for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub domain_name: Option<String>,
    pub active: bool,
    pub available: bool,
    pub invalid: bool,
}

impl ParsedReply {
    pub fn status(&self) -> DomainStatus {
        DomainStatus::from_markers(self.active, self.available, self.invalid)
    }

    fn mark(&mut self, marker: &[u8]) {
        match marker {
            b"active" => self.active = true,
            b"available" => self.available = true,
            b"invalid" => self.invalid = true,
            _ => {}
        }
    }
}

/// Tracks where the reader is relative to the first `<domain>` element.
#[derive(Default)]
struct ReplyWalker {
    depth: usize,
    root: Option<usize>,
    done: bool,
    in_name: bool,
    in_status: bool,
    name: String,
    reply: ParsedReply,
}

impl ReplyWalker {
    fn open(&mut self, local: &[u8], empty: bool) {
        self.depth += 1;

        if !self.done {
            match self.root {
                None if local == DOMAIN => self.root = Some(self.depth),
                None => {}
                Some(root) => match self.depth - root {
                    1 if local == DOMAIN_NAME => self.in_name = !empty,
                    1 if local == STATUS => self.in_status = !empty,
                    2 if self.in_status => self.reply.mark(local),
                    _ => {}
                },
            }
        }

        if empty {
            self.close();
        }
    }

    fn close(&mut self) {
        let closing = self.depth;
        self.depth = self.depth.saturating_sub(1);

        if self.done {
            return;
        }

        match self.root {
            Some(root) if closing == root => self.done = true,
            Some(root) if closing == root + 1 => {
                self.in_name = false;
                self.in_status = false;
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.done || !self.in_name {
            return;
        }
        if self.root.map(|root| root + 1) == Some(self.depth) {
            self.name.push_str(text);
        }
    }

    fn finish(mut self) -> ParsedReply {
        let name = self.name.trim();
        if !name.is_empty() {
            self.reply.domain_name = Some(name.to_string());
        }
        self.reply
    }
}

fn check_attributes(start: &BytesStart<'_>) -> Result<(), ReplyParseError> {
    for attr in start.attributes() {
        attr.map_err(|e| ReplyParseError::Malformed(e.to_string()))?;
    }
    Ok(())
}

/// Interprets DAS reply datagrams
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a reply of the shape
    /// `<domain><domainName/><status><active/>|<available/>|<invalid/></status></domain>`.
    ///
    /// Elements are matched by local name, so namespace prefixes are ignored,
    /// and the first `<domain>` element is used wherever it sits in the
    /// document. The whole document must still be well formed, attributes
    /// included, and every element must be closed.
    pub fn parse(bytes: &[u8]) -> Result<ParsedReply, ReplyParseError> {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut walker = ReplyWalker::default();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| ReplyParseError::Malformed(e.to_string()))?;

            match event {
                Event::Start(e) => {
                    check_attributes(&e)?;
                    walker.open(e.local_name().as_ref(), false);
                }
                Event::Empty(e) => {
                    check_attributes(&e)?;
                    walker.open(e.local_name().as_ref(), true);
                }
                Event::End(_) => walker.close(),
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| ReplyParseError::Malformed(e.to_string()))?;
                    walker.text(&text);
                }
                Event::CData(c) => walker.text(&String::from_utf8_lossy(&c)),
                Event::Eof => break,
                _ => {}
            }
        }

        if walker.depth > 0 {
            return Err(ReplyParseError::Unterminated);
        }
        if !walker.done {
            return Err(ReplyParseError::NoDomainElement);
        }

        Ok(walker.finish())
    }

    /// Turn a received datagram into a [`LookupResult`].
    ///
    /// Never fails: an unparseable reply, or one without a recognised status
    /// marker, yields [`DomainStatus::Error`] with the raw text attached.
    pub fn classify(bytes: &[u8], requested: &str) -> LookupResult {
        let raw_reply = String::from_utf8_lossy(bytes).into_owned();

        let reply = match Self::parse(bytes) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, domain = %requested, "Failed to parse DAS reply");
                return LookupResult::unclassified(requested, raw_reply);
            }
        };

        let status = reply.status();
        if status == DomainStatus::Error {
            warn!(domain = %requested, "DAS reply has no recognised status marker");
        }

        let domain_name = reply
            .domain_name
            .unwrap_or_else(|| requested.to_string());

        debug!(domain = %domain_name, status = %status, "DAS reply parsed");

        LookupResult::new(domain_name, status, raw_reply)
    }
}
