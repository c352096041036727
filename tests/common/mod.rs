pub mod fixtures;
pub mod pdf_assertions;

use cardsheet::{PipelineError, SheetConfig, SheetPipeline, SheetSummary};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub summary: SheetSummary,
}

impl GeneratedPdf {
    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a sheet in memory from card source text
pub fn generate_sheet(source: &str, config: SheetConfig) -> Result<GeneratedPdf, PipelineError> {
    let pipeline = SheetPipeline::new(config)?;
    let (bytes, summary) = pipeline.generate(source, Vec::new())?;
    let doc = LopdfDocument::load_mem(&bytes)
        .map_err(|e| PipelineError::Render(cardsheet::RenderError::Pdf(e.to_string())))?;
    Ok(GeneratedPdf { bytes, doc, summary })
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "Expected {} pages, found {}",
            $expected,
            $pdf.page_count()
        );
    };
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let shown = $crate::common::pdf_assertions::shown_text(&$pdf.doc, $page);
        assert!(
            shown.iter().any(|s| s.contains($text)),
            "Page {} does not show {:?}; shown strings: {:?}",
            $page,
            $text,
            shown
        );
    };
}
