/// A complete, valid card document with every required field.
pub fn card_doc(id: usize) -> String {
    format!(
        "card_id: C-{id:02}\n\
         title: Card {id}\n\
         description: A short description.\n\
         print_layout: standard\n\
         scenario: Temple\n\
         outcome: success\n"
    )
}

/// A card document with extra YAML appended after the required fields.
pub fn card_doc_with(id: usize, extra: &str) -> String {
    format!("{}{}", card_doc(id), extra)
}

/// `n` valid documents separated by `---`.
pub fn deck_source(n: usize) -> String {
    (1..=n).map(card_doc).collect::<Vec<_>>().join("---\n")
}

/// The same cards as `deck_source`, wrapped in Markdown fences with prose between them.
pub fn markdown_source(n: usize) -> String {
    let mut md = String::from("# Investigation cards\n\n");
    for id in 1..=n {
        md.push_str(&format!("Card {id} notes.\n\n```yaml\n{}```\n\n", card_doc(id)));
    }
    md
}
