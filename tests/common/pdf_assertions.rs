use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Decoded content stream of a 1-based page.
pub fn page_content(doc: &LopdfDocument, page_number: u32) -> Content {
    let pages = doc.get_pages();
    let page_id = *pages
        .get(&page_number)
        .unwrap_or_else(|| panic!("page {} does not exist", page_number));
    doc.get_and_decode_page_content(page_id)
        .expect("page content should decode")
}

/// Raw WinAnsi bytes of every string shown with `Tj` on a page.
pub fn shown_bytes(doc: &LopdfDocument, page_number: u32) -> Vec<Vec<u8>> {
    page_content(doc, page_number)
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| bytes.to_vec())
        .collect()
}

/// Shown strings decoded as Latin-1, which covers plain ASCII text.
pub fn shown_text(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    shown_bytes(doc, page_number)
        .into_iter()
        .map(|bytes| bytes.into_iter().map(char::from).collect())
        .collect()
}

/// Number of operations with `operator` on a page.
pub fn count_operator(doc: &LopdfDocument, page_number: u32, operator: &str) -> usize {
    page_content(doc, page_number)
        .operations
        .iter()
        .filter(|op| op.operator == operator)
        .count()
}

/// Cards drawn on a page; every rounded card border closes its path once.
pub fn card_count(doc: &LopdfDocument, page_number: u32) -> usize {
    count_operator(doc, page_number, "h")
}
