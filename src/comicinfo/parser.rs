//! ComicInfo.xml decoder
//!
//! Streams over the document once: the text buffer resets on every opening
//! tag and is flushed into the record when the tag closes. Element names
//! outside the known set are skipped, so tagger-specific extensions never
//! break a decode. Only an ill-formed document is an error.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;

/// Metadata extracted from a ComicInfo.xml document.
///
/// Every field is independently optional in the source document; absent
/// elements leave the matching field at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComicMetadata {
    pub title: String,
    pub series: String,
    pub number: String,
    pub volume: String,
    pub summary: String,
    pub writer: Option<String>,
    pub penciller: Option<String>,
    pub inker: Option<String>,
    pub colorist: Option<String>,
    pub letterer: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i32>,
}

impl ComicMetadata {
    /// Decode a ComicInfo.xml byte buffer.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();

        let mut metadata = ComicMetadata::default();
        let mut text = String::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(_) => text.clear(),
                Event::Text(chunk) => text.push_str(&chunk.unescape()?),
                Event::CData(chunk) => {
                    let raw = chunk.into_inner();
                    text.push_str(&reader.decoder().decode(&raw)?);
                }
                Event::End(end) => {
                    let local_name = end.local_name();
                    let name = reader.decoder().decode(local_name.as_ref())?;
                    metadata.assign(&name, text.trim());
                    text.clear();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(metadata)
    }

    fn assign(&mut self, element: &str, value: &str) {
        match element {
            "Title" => self.title = value.to_string(),
            "Series" => self.series = value.to_string(),
            "Number" => self.number = value.to_string(),
            "Volume" => self.volume = value.to_string(),
            "Summary" => self.summary = value.to_string(),
            "Writer" => self.writer = Some(value.to_string()),
            "Penciller" => self.penciller = Some(value.to_string()),
            "Inker" => self.inker = Some(value.to_string()),
            "Colorist" => self.colorist = Some(value.to_string()),
            "Letterer" => self.letterer = Some(value.to_string()),
            "Publisher" => self.publisher = Some(value.to_string()),
            "Genre" => self.genre = Some(value.to_string()),
            "Year" => self.year = parse_number(element, value),
            "Month" => self.month = parse_number(element, value),
            _ => tracing::debug!(element, "skipping unrecognized ComicInfo element"),
        }
    }
}

/// Soft integer parse: non-numeric text leaves the field unset.
fn parse_number(element: &str, value: &str) -> Option<i32> {
    match value.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            if !value.is_empty() {
                tracing::warn!(element, value, "non-numeric value, leaving field unset");
            }
            None
        }
    }
}
