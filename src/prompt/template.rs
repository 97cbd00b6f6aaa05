// src/prompt/template.rs

// dependencies
use std::fmt::Display;

/// Substitute `{{key}}` placeholders in `template`.
///
/// Each `(key, value)` pair replaces every occurrence of `{{key}}` with the
/// `Display` rendering of `value`, in iteration order. Placeholders without a
/// matching key are left untouched.
///
/// ```rust
/// use prompt_limiter::prompt::render;
///
/// let prompt = render("Translate {{text}} into {{lang}}.", [("text", "hello"), ("lang", "French")]);
/// assert_eq!(prompt, "Translate hello into French.");
/// ```
pub fn render<I, K, V>(template: &str, vars: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    vars.into_iter().fold(template.to_string(), |out, (key, value)| {
        out.replace(&format!("{{{{{}}}}}", key.as_ref()), &value.to_string())
    })
}
