// src/prompt/few_shot.rs

const PREAMBLE: &str = "You are a helpful assistant. Examples:";

/// Build a few-shot prompt from `(question, answer)` examples.
///
/// Sections are separated by a blank line: the preamble, one numbered
/// `Example i:` block per pair, then the open `Q:`/`A:` for `question`.
pub fn build_few_shot<Q, A>(examples: &[(Q, A)], question: &str) -> String
where
    Q: AsRef<str>,
    A: AsRef<str>,
{
    let mut parts = Vec::with_capacity(examples.len() + 2);
    parts.push(PREAMBLE.to_string());
    for (i, (input, output)) in examples.iter().enumerate() {
        parts.push(format!(
            "Example {}:\nQ: {}\nA: {}",
            i + 1,
            input.as_ref(),
            output.as_ref()
        ));
    }
    parts.push(format!("Q: {question}\nA:"));
    parts.join("\n\n")
}
