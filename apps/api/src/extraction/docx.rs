use std::io::{Cursor, Read};

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Paragraph text of the main document part, one paragraph per line.
///
/// Table cells hold ordinary `w:p` paragraphs, so they are picked up by the
/// same walk in document order.
pub(super) fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let doc = roxmltree::Document::parse(&xml).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = doc
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "p")))
        .map(|p| {
            let mut text = String::new();
            for run in p.descendants() {
                if run.has_tag_name((W_NS, "t")) {
                    text.push_str(run.text().unwrap_or_default());
                } else if run.has_tag_name((W_NS, "tab")) {
                    text.push(' ');
                }
            }
            text
        })
        .filter(|t| !t.trim().is_empty())
        .collect();

    Ok(paragraphs.join("\n"))
}
