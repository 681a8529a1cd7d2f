//! Word export — transcribes raw MCQ text into a .docx built in memory.
//!
//! The MCQ text is opaque here: every non-empty line becomes one paragraph,
//! in order, with no interpretation of its role (stem, option, answer line).

use std::io::Cursor;

use docx_rs::{Docx, DocxError, Paragraph, Run, Style, StyleType};

/// MIME type for the OOXML word-processing format.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document heading: "<topic> MCQs", or the generic fallback for blank topics.
pub fn document_title(topic: &str) -> String {
    let topic = topic.trim();
    if topic.is_empty() {
        "Generated MCQs".to_string()
    } else {
        format!("{topic} MCQs")
    }
}

/// Assembles the document: one Title-styled heading, then one paragraph per
/// non-empty line of `mcqs`. Blank lines are dropped, not preserved as empty
/// paragraphs. Empty `mcqs` yields a heading-only document.
pub fn build_mcq_document(topic: &str, mcqs: &str) -> Docx {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_paragraph(
            Paragraph::new()
                .style("Title")
                .add_run(Run::new().add_text(document_title(topic))),
        );

    for line in mcqs.split('\n') {
        if !line.trim().is_empty() {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
    }

    docx
}

/// Packs the document into an in-memory buffer ready to stream as a download.
pub fn pack_document(docx: Docx) -> Result<Vec<u8>, DocxError> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor)?;
    Ok(cursor.into_inner())
}
