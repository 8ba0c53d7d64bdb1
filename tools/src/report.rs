use npchunk::{Grammar, NOUN_PHRASE};

/// Parse `text` and render every tree followed by its chunks.
pub fn report(grammar: &Grammar, text: &str, label: &str) -> String {
    let tokens = lexers::words(text);
    tracing::debug!("Tokens: {:?}", tokens);
    let trees = match npchunk::parse(grammar, &tokens) {
        Err(e) => return format!("{}\n", e),
        Ok(trees) if trees.is_empty() => return "Could not parse sentence.\n".to_string(),
        Ok(trees) => trees,
    };
    let heading = if label == NOUN_PHRASE {
        "Noun Phrase Chunks".to_string()
    } else {
        format!("{} Chunks", label)
    };
    let mut out = String::new();
    for tree in &trees {
        out.push_str(&tree.pretty());
        out.push('\n');
        out.push_str(&heading);
        out.push('\n');
        for chunk in npchunk::chunks(tree, label) {
            out.push_str(&chunk.leaves().join(" "));
            out.push('\n');
        }
    }
    out
}
