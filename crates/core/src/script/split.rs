/// Splits a SQL script into individual statements.
///
/// A `;` ends a statement when the whitespace that follows it contains a line
/// break or runs to the end of the text. A `;` followed by more text on the
/// same line stays inside the statement. Pieces are trimmed and empty pieces
/// are dropped; the terminating `;` is not included.
pub fn split_statements(text: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if ch != ';' {
            continue;
        }

        let rest = &text[idx + 1..];
        let trailing = rest.len() - rest.trim_start().len();
        let ends_statement = trailing == rest.len() || rest[..trailing].contains('\n');

        if ends_statement {
            push_trimmed(&mut statements, &text[start..idx]);
            start = idx + 1;
        }
    }

    push_trimmed(&mut statements, &text[start..]);
    statements
}

fn push_trimmed(statements: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        statements.push(piece.to_string());
    }
}
