//! Text extraction strategies keyed by file extension
//!
//! Each strategy is best-effort: it may decline by returning `None`, which
//! triggers fallback to a plain-text read. Only an unreadable plain-text
//! fallback is an error.

use crate::error::{JobPilotError, Result};
use crate::input::file_detector::FileType;
use log::debug;
use pulldown_cmark::{html, Parser};
use std::path::Path;

/// A format-specific extractor. Declining (`None`) is the normal way to
/// signal a missing decoder or a failed decode; it never surfaces as an
/// error to the caller.
trait TextExtractor {
    fn extract(&self, path: &Path) -> Option<String>;
}

struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Option<String> {
        let bytes = std::fs::read(path).ok()?;
        match pdf_extract::extract_text_from_mem(&bytes) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("PDF decode declined for {}: {}", path.display(), e);
                None
            }
        }
    }
}

struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Option<String> {
        // No DOCX decoder is bundled; decline so the plain-text fallback runs.
        debug!("No DOCX decoder available for {}", path.display());
        None
    }
}

struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Option<String> {
        let markdown = std::fs::read_to_string(path).ok()?;

        let parser = Parser::new(&markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Some(html_to_text(&html_output))
    }
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let re = regex::Regex::new(r"<[^>]*>").expect("Invalid tag regex");
    let clean_text = re.replace_all(&text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

/// Extract document text, routing by extension and falling back to a plain
/// read when the format strategy declines or fails.
pub fn extract_document(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let file_type = FileType::from_extension(extension);

    let decoded = match file_type {
        FileType::Pdf => PdfExtractor.extract(path),
        FileType::Docx => DocxExtractor.extract(path),
        FileType::Markdown => MarkdownExtractor.extract(path),
        FileType::Text => None,
    };

    if let Some(text) = decoded {
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        JobPilotError::DocumentUnreadable(format!("{}: {}", path.display(), e))
    })
}
