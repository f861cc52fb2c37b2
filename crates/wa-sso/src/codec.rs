//! Envelope codec.
//!
//! Requests are written as
//! `<?xml version="1.0"?><!DOCTYPE Request SYSTEM "SSORequest.dtd">`
//! immediately followed by the `Request` element, with no whitespace
//! anywhere. Responses are read loosely: the document must be well formed,
//! and only the attributes of the root's first child element matter.

use quick_xml::escape;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{SsoError, SsoResult};
use crate::request::RequestEnvelope;

/// XML declaration and doctype prepended to every request.
pub const REQUEST_PROLOG: &str =
    r#"<?xml version="1.0"?><!DOCTYPE Request SYSTEM "SSORequest.dtd">"#;

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "text/xml";

/// Serializes a request envelope to the exact bytes sent on the wire.
pub fn encode_request(envelope: &RequestEnvelope) -> SsoResult<Vec<u8>> {
    let mut writer = Writer::new(Vec::with_capacity(256));
    writer.get_mut().extend_from_slice(REQUEST_PROLOG.as_bytes());

    let mut element = BytesStart::new(envelope.operation().element_name());
    for (name, value) in envelope.attributes() {
        element.push_attribute((*name, value.as_str()));
    }

    writer.write_event(Event::Start(BytesStart::new(RequestEnvelope::ROOT)))?;
    writer.write_event(Event::Empty(element))?;
    writer.write_event(Event::End(BytesEnd::new(RequestEnvelope::ROOT)))?;

    Ok(writer.into_inner())
}

/// The operation element of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseElement {
    /// Element name, e.g. `LogOn`.
    pub name: String,
    /// Unescaped attributes in document order.
    pub attributes: Vec<(String, String)>,
}

impl ResponseElement {
    /// Returns the value of a named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the `result` attribute.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.attribute("result")
    }

    /// Returns the `token` attribute.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.attribute("token")
    }

    /// Interprets `result` as a boolean. Only the literal `true` counts.
    #[must_use]
    pub fn result_flag(&self) -> bool {
        self.result() == Some("true")
    }
}

/// A parsed response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// Name of the root element.
    pub root: String,
    /// First child element of the root.
    pub element: ResponseElement,
}

/// Parses a response body.
///
/// Malformed XML is an [`SsoError::XmlParse`]; a well-formed document whose
/// root has no child element is an [`SsoError::MissingElement`].
///
/// Only the predefined XML entities and character references are expanded.
/// Entities declared in an internal DTD subset are not, so a document that
/// uses one is reported as [`SsoError::XmlParse`].
pub fn decode_response(body: &str) -> SsoResult<ResponseEnvelope> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut depth: usize = 0;
    let mut root: Option<String> = None;
    let mut first_child: Option<ResponseElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                visit_element(&e, depth, &mut root, &mut first_child)?;
                depth += 1;
            }
            Event::Empty(e) => {
                visit_element(&e, depth, &mut root, &mut first_child)?;
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| SsoError::XmlParse("unmatched end tag".to_string()))?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(SsoError::XmlParse(
                        "text outside the root element".to_string(),
                    ));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(SsoError::XmlParse(
                    "CDATA outside the root element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(SsoError::XmlParse("unclosed element at end of document".to_string()));
    }
    let root = root.ok_or_else(|| SsoError::XmlParse("no root element".to_string()))?;
    let element = first_child
        .ok_or_else(|| SsoError::MissingElement(format!("child element of {root}")))?;

    Ok(ResponseEnvelope { root, element })
}

fn visit_element(
    e: &BytesStart<'_>,
    depth: usize,
    root: &mut Option<String>,
    first_child: &mut Option<ResponseElement>,
) -> SsoResult<()> {
    let element = read_element(e)?;
    match depth {
        0 if root.is_some() => Err(SsoError::XmlParse("multiple root elements".to_string())),
        0 => {
            *root = Some(element.name);
            Ok(())
        }
        1 if first_child.is_none() => {
            *first_child = Some(element);
            Ok(())
        }
        _ => Ok(()),
    }
}

// Attributes are decoded on every element so that a malformed attribute
// anywhere in the document is rejected.
fn read_element(e: &BytesStart<'_>) -> SsoResult<ResponseElement> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(ResponseElement { name, attributes })
}

/// Escapes `&`, `<` and `>` so a raw response body can be shown as text.
#[must_use]
pub fn escape_markup(raw: &str) -> String {
    escape::partial_escape(raw).into_owned()
}
