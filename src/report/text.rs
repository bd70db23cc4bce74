use crate::model::Argument;
use crate::report::Error;

/// Replaces markup-significant characters with their entities.
///
/// Input is assumed to hold no entities yet; existing ones are escaped
/// again. Absent text stays absent: use `Option::map` with this function.
pub fn escape_plain(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut buffer, ch);
    }
    buffer
}

/// Like [`escape_plain`], and also keeps line breaks and runs of spaces
/// visible. Every space of a run except the last becomes `&nbsp;` so the
/// renderer can still wrap at the final one.
pub fn escape_display(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ' ' => buffer.push_str(if chars.peek() == Some(&' ') {
                "&nbsp;"
            } else {
                " "
            }),
            '\n' => buffer.push_str("<br/>\n"),
            _ => push_escaped(&mut buffer, ch),
        }
    }
    buffer
}

fn push_escaped(buffer: &mut String, ch: char) {
    match ch {
        '<' => buffer.push_str("&lt;"),
        '>' => buffer.push_str("&gt;"),
        '"' => buffer.push_str("&quot;"),
        '\'' => buffer.push_str("&apos;"),
        '&' => buffer.push_str("&amp;"),
        _ => buffer.push(ch),
    }
}

/// `numerator / denominator` as a percentage with two decimals.
pub fn format_percentage(numerator: usize, denominator: usize) -> Result<String, Error> {
    if denominator == 0 {
        return Err(Error::Division { numerator });
    }
    Ok(format!(
        "{:.2}%",
        numerator as f64 / denominator as f64 * 100.0
    ))
}

pub fn render_argument(argument: &Argument) -> String {
    argument.to_string()
}

pub fn render_arguments(arguments: &[Argument]) -> String {
    comma_separate(arguments.iter().map(render_argument))
}

pub fn comma_separate<I, S>(strings: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buffer = String::new();
    for (index, string) in strings.into_iter().enumerate() {
        if index > 0 {
            buffer.push_str(", ");
        }
        buffer.push_str(string.as_ref());
    }
    buffer
}

/// Drops the `@<id>` suffix of a compound `name@id` thread identifier.
pub fn strip_thread_name(thread_id: &str) -> &str {
    match thread_id.rfind('@') {
        Some(index) => &thread_id[..index],
        None => thread_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_plain("<a>&\"'"), "&lt;a&gt;&amp;&quot;&apos;");
        assert_eq!(escape_plain("plain text"), "plain text");
        assert_eq!(escape_plain("&amp;"), "&amp;amp;");
        assert_eq!(None::<&str>.map(escape_plain), None);
    }

    #[test]
    fn test_escape_display_keeps_whitespace() {
        assert_eq!(escape_display("a  b\n"), "a&nbsp; b<br/>\n");
        assert_eq!(escape_display("a    b"), "a&nbsp;&nbsp;&nbsp; b");
        assert_eq!(escape_display("x <y>"), "x &lt;y&gt;");
        assert_eq!(escape_display("trailing  "), "trailing&nbsp; ");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(1, 3).unwrap(), "33.33%");
        assert_eq!(format_percentage(2, 3).unwrap(), "66.67%");
        assert_eq!(format_percentage(5, 5).unwrap(), "100.00%");
        assert_eq!(format_percentage(0, 7).unwrap(), "0.00%");
        assert_eq!(
            format_percentage(3, 0),
            Err(Error::Division { numerator: 3 })
        );
    }

    #[test]
    fn test_render_arguments() {
        {
            assert_eq!(render_argument(&Argument::Null), "null");
            assert_eq!(render_argument(&"x".into()), "\"x\"");
            assert_eq!(render_argument(&'c'.into()), "'c'");
            assert_eq!(render_argument(&5i64.into()), "5");
            assert_eq!(render_argument(&1.5f64.into()), "1.5");
            assert_eq!(render_argument(&true.into()), "true");
        }
        {
            let arguments = vec![Argument::from("user"), Argument::Null, Argument::from(42i64)];
            assert_eq!(render_arguments(&arguments), "\"user\", null, 42");
            assert_eq!(render_arguments(&[]), "");
        }
    }

    #[test]
    fn test_strip_thread_name() {
        assert_eq!(strip_thread_name("TestNG-pool-1@1234"), "TestNG-pool-1");
        assert_eq!(strip_thread_name("a@b@42"), "a@b");
        assert_eq!(strip_thread_name("main"), "main");
    }

    #[test]
    fn test_formatters_are_idempotent() {
        let text = "a  <b>\n";
        assert_eq!(escape_display(text), escape_display(text));
        assert_eq!(format_percentage(1, 8), format_percentage(1, 8));
    }
}
