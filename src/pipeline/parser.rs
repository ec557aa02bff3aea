//! In-process .docx conversion via `docx-rs`.
//!
//! Used only when the external tool is unavailable or failed, and only for
//! `.docx` input. Extraction is paragraph-level: body paragraphs in document
//! order, each followed by one line break, UTF-8. Tables, headers, footers,
//! and footnotes are not extracted — the tool path is the high-fidelity
//! strategy; this one exists so a missing pandoc never blocks a run.

use crate::error::FileError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The one extension the fallback supports.
pub const SUPPORTED_EXTENSION: &str = "docx";

/// Convert `input` to plain text at `output`.
///
/// Parse and write errors are per-file failures. The output is written in a
/// single call so a parse failure never leaves a partial file behind.
pub fn convert_with_parser(input: &Path, output: &Path) -> Result<(), FileError> {
    let text = extract_paragraphs(input)?;
    fs::write(output, text).map_err(|e| FileError::WriteFailed {
        path: output.to_path_buf(),
        source: e,
    })
}

/// Extract the paragraph text of a .docx document, one line per paragraph.
pub fn extract_paragraphs(input: &Path) -> Result<String, FileError> {
    let bytes = fs::read(input).map_err(|e| FileError::ParseFailed {
        detail: format!("cannot read '{}': {e}", input.display()),
    })?;
    let doc = docx_rs::read_docx(&bytes).map_err(|e| FileError::ParseFailed {
        detail: e.to_string(),
    })?;

    let mut text = String::new();
    let mut paragraphs = 0usize;
    for child in &doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            push_paragraph(para, &mut text);
            text.push('\n');
            paragraphs += 1;
        }
    }

    debug!(input = %input.display(), paragraphs, "extracted paragraph text");
    Ok(text)
}

fn push_paragraph(para: &docx_rs::Paragraph, out: &mut String) {
    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run(run, out),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for nested in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = nested {
                        push_run(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => out.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => out.push('\t'),
            docx_rs::RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use tempfile::TempDir;

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let mut doc = Docx::new();
        for p in paragraphs {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let file = fs::File::create(path).unwrap();
        doc.build().pack(file).unwrap();
    }

    #[test]
    fn one_line_per_paragraph_in_document_order() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("sample.docx");
        write_docx(&input, &["首段内容", "second paragraph", "third"]);

        let text = extract_paragraphs(&input).unwrap();
        assert_eq!(text, "首段内容\nsecond paragraph\nthird\n");
    }

    #[test]
    fn empty_paragraphs_become_blank_lines() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("gaps.docx");
        write_docx(&input, &["above", "", "below"]);

        let text = extract_paragraphs(&input).unwrap();
        assert_eq!(text, "above\n\nbelow\n");
    }

    #[test]
    fn garbage_input_is_a_parse_failure() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("not-a-docx.docx");
        fs::write(&input, b"this is not a zip archive").unwrap();

        let err = extract_paragraphs(&input).unwrap_err();
        assert!(matches!(err, FileError::ParseFailed { .. }));
    }

    #[test]
    fn missing_input_is_a_parse_failure() {
        let err = extract_paragraphs(Path::new("/no/such/file.docx")).unwrap_err();
        assert!(matches!(err, FileError::ParseFailed { .. }));
    }

    #[test]
    fn convert_writes_utf8_output() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("case.docx");
        let output = tmp.path().join("case.txt");
        write_docx(&input, &["立案决定书", "2023年1月"]);

        convert_with_parser(&input, &output).unwrap();
        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "立案决定书\n2023年1月\n");
    }
}
