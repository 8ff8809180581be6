//! Case definition loading.

use std::fs;
use std::io;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use super::model::{CaseDefinition, CaseDocument};
use crate::domain::AppError;

/// Origin reported for documents parsed from memory.
const INLINE_ORIGIN: &str = "<inline>";

/// Load and parse the case definition at `path`.
pub fn load_case(path: &Path) -> Result<CaseDefinition, AppError> {
    let shown = path.display().to_string();

    if !path.is_file() {
        return Err(AppError::ConfigNotFound {
            path: shown,
            details: "not a readable file".to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => {
            AppError::MalformedConfig { path: shown.clone(), details: err.to_string() }
        }
        _ => AppError::ConfigNotFound { path: shown.clone(), details: err.to_string() },
    })?;

    let case = parse_document(&content)
        .map_err(|details| AppError::MalformedConfig { path: shown.clone(), details })?;
    debug!(
        path = %shown,
        directories = case.input_directories().len(),
        parameters = case.parameters().len(),
        "parsed case definition"
    );
    Ok(case)
}

/// Parse a case definition from string content.
pub fn parse_case_content(content: &str) -> Result<CaseDefinition, AppError> {
    parse_document(content)
        .map_err(|details| AppError::MalformedConfig { path: INLINE_ORIGIN.to_string(), details })
}

fn parse_document(content: &str) -> Result<CaseDefinition, String> {
    check_well_formed(content)?;
    let doc: CaseDocument = quick_xml::de::from_str(content).map_err(|err| err.to_string())?;
    Ok(doc.into())
}

/// Walk the raw event stream once: exactly one root element, balanced tags,
/// and no character data outside the root.
fn check_well_formed(content: &str) -> Result<(), String> {
    let mut reader = Reader::from_str(content);
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| format!("{} at byte {}", err, reader.error_position()))?;
        match event {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(text) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err("character data outside the root element".to_string());
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err("character data outside the root element".to_string());
            }
            Event::Eof => break,
            _ => {}
        }
        if roots > 1 {
            return Err("more than one root element".to_string());
        }
    }

    if depth > 0 {
        return Err("unexpected end of document: unclosed element".to_string());
    }
    if roots == 0 {
        return Err("document has no root element".to_string());
    }
    Ok(())
}
