//! Catalog entry XML parsing
//!
//! Only two direct children of the root element matter:
//! - `label` - the course title
//! - `courseSectionInformation` - free text carrying prerequisites or a
//!   "See X" cross-reference
//!
//! Either may be missing. Namespace prefixes are ignored.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::adapter::FetchError;

/// Fields of interest from one catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDocument {
    /// `courseSectionInformation` text
    pub section_information: Option<String>,

    /// `label` text
    pub label: Option<String>,
}

#[derive(Clone, Copy)]
enum Field {
    SectionInformation,
    Label,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"courseSectionInformation" => Some(Self::SectionInformation),
            b"label" => Some(Self::Label),
            _ => None,
        }
    }
}

impl CatalogDocument {
    /// Create a document from field values
    pub fn new(label: Option<&str>, section_information: Option<&str>) -> Self {
        Self {
            section_information: section_information.map(str::to_string),
            label: label.map(str::to_string),
        }
    }

    /// Parse a catalog entry
    ///
    /// Malformed XML is an `InvalidResponse`; missing fields are not.
    pub fn from_xml(xml: &str) -> Result<Self, FetchError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut saw_root = false;
        let mut current: Option<Field> = None;
        let mut label = String::new();
        let mut section_information = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    saw_root = true;
                    if depth == 2 {
                        current = Field::from_local_name(e.local_name().as_ref());
                    }
                }
                Ok(Event::Empty(_)) => {
                    saw_root = true;
                }
                Ok(Event::End(_)) => {
                    if depth == 2 {
                        current = None;
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Text(e)) => {
                    if let Some(field) = current {
                        let text = e
                            .unescape()
                            .map_err(|err| FetchError::InvalidResponse(format!("XML text error: {}", err)))?;
                        append(field_buffer(field, &mut label, &mut section_information), &text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(field) = current {
                        let raw = e.into_inner();
                        let text = String::from_utf8_lossy(&raw);
                        append(field_buffer(field, &mut label, &mut section_information), &text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(FetchError::InvalidResponse(format!(
                        "XML parse error at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => (),
            }
            buf.clear();
        }

        if !saw_root {
            return Err(FetchError::InvalidResponse("document has no root element".to_string()));
        }

        if depth != 0 {
            return Err(FetchError::InvalidResponse("document ends inside an element".to_string()));
        }

        Ok(Self {
            section_information: non_empty(section_information),
            label: non_empty(label),
        })
    }
}

fn field_buffer<'a>(field: Field, label: &'a mut String, section: &'a mut String) -> &'a mut String {
    match field {
        Field::Label => label,
        Field::SectionInformation => section,
    }
}

fn append(buffer: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(text);
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
