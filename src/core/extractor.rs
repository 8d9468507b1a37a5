use crate::domain::model::LinkRecord;
use crate::utils::error::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// OPC relationship type marking a hyperlink entry in the rels part.
pub const HYPERLINK_RELATIONSHIP_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Relationship index of the main document part inside the package.
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Pulls every hyperlink relationship out of one document.
///
/// A document that cannot be opened or parsed contributes zero links and a
/// warning; one bad file must never abort a bulk scan.
pub fn extract(doc: &Path) -> Vec<LinkRecord> {
    match read_hyperlinks(doc) {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!("unable to open \"{}\" | {}", doc.display(), e);
            Vec::new()
        }
    }
}

fn read_hyperlinks(doc: &Path) -> Result<Vec<LinkRecord>> {
    let file = File::open(doc)?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_RELS_PART)?
        .read_to_string(&mut xml)?;

    let mut links = Vec::new();
    let mut reader = Reader::from_str(&xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => {
                let mut rel_type = None;
                let mut target = None;

                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Type" => {
                            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
                            rel_type = Some(value.into_owned());
                        }
                        b"Target" => {
                            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
                            target = Some(value.into_owned());
                        }
                        _ => {}
                    }
                }

                if let (Some(rel_type), Some(target)) = (rel_type, target) {
                    if rel_type == HYPERLINK_RELATIONSHIP_TYPE {
                        links.push(LinkRecord {
                            source: doc.to_path_buf(),
                            target,
                        });
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(links)
}
