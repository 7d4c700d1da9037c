//! Diff syntax highlighting.
//!
//! Produces the same markup as a Pygments `DiffLexer` fed through an
//! `HtmlFormatter` with default options, so existing stylesheets keyed on the
//! `highlight` class and the `gi`/`gd`/`gh` token classes keep working.

use regex::Regex;
use std::sync::LazyLock;

const OPEN: &str = "<div class=\"highlight\"><pre>";
const CLOSE: &str = "</pre></div>\n";

/// Normal-diff change commands such as `1c1` or `3,4d2`.
static CHANGE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d(?:,\d+)?[acd]\d+(?:,\d+)?$").expect("Invalid CHANGE_COMMAND regex")
});

/// Token class for a single diff line, `None` for plain text.
///
/// Rules are tried in lexer order; the first match wins.
fn line_class(line: &str) -> Option<&'static str> {
    if line.starts_with(' ') {
        None
    } else if line.starts_with('!') || line == "---" {
        Some("gs")
    } else if line.starts_with("< ") || line.starts_with('-') {
        Some("gd")
    } else if line.starts_with("> ") || line.starts_with('+') {
        Some("gi")
    } else if line.starts_with('@') || CHANGE_COMMAND.is_match(line) {
        Some("gu")
    } else if line.starts_with("Index")
        || line.starts_with("index")
        || line.starts_with("diff")
        || line.starts_with('=')
    {
        Some("gh")
    } else {
        None
    }
}

fn escape_html_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Renders raw diff text as highlighted HTML.
///
/// Line endings are normalized, surrounding blank lines dropped and a final
/// newline guaranteed, so the result is always
/// `<div class="highlight"><pre>{lines}\n</pre></div>\n`.
pub fn highlight_diff(diff: &str) -> String {
    let normalized = diff.replace("\r\n", "\n").replace('\r', "\n");
    let body = normalized.trim_matches('\n');

    let mut out = String::with_capacity(OPEN.len() + body.len() * 2 + CLOSE.len() + 1);
    out.push_str(OPEN);
    for line in body.split('\n') {
        match line_class(line) {
            Some(class) if !line.is_empty() => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                escape_html_into(&mut out, line);
                out.push_str("</span>");
            }
            _ => escape_html_into(&mut out, line),
        }
        out.push('\n');
    }
    out.push_str(CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(
            highlight_diff("test_diff"),
            "<div class=\"highlight\"><pre>test_diff\n</pre></div>\n"
        );
    }

    #[test]
    fn test_empty_diff() {
        assert_eq!(
            highlight_diff(""),
            "<div class=\"highlight\"><pre>\n</pre></div>\n"
        );
    }

    #[test]
    fn test_unified_diff_classes() {
        let diff = "diff --git a/app.py b/app.py\n\
                    index 83db48f..bf269f4 100644\n\
                    --- a/app.py\n\
                    +++ b/app.py\n\
                    @@ -1,2 +1,2 @@\n \
                    import os\n\
                    -print 'hi'\n\
                    +print('hi')\n";
        let html = highlight_diff(diff);
        let expected = concat!(
            "<div class=\"highlight\"><pre>",
            "<span class=\"gh\">diff --git a/app.py b/app.py</span>\n",
            "<span class=\"gh\">index 83db48f..bf269f4 100644</span>\n",
            "<span class=\"gd\">--- a/app.py</span>\n",
            "<span class=\"gi\">+++ b/app.py</span>\n",
            "<span class=\"gu\">@@ -1,2 +1,2 @@</span>\n",
            " import os\n",
            "<span class=\"gd\">-print &#39;hi&#39;</span>\n",
            "<span class=\"gi\">+print(&#39;hi&#39;)</span>\n",
            "</pre></div>\n"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_normal_diff_classes() {
        let html = highlight_diff("1c1\n< old\n---\n> new\n3,4d2\n10c10");
        let expected = concat!(
            "<div class=\"highlight\"><pre>",
            "<span class=\"gu\">1c1</span>\n",
            "<span class=\"gd\">&lt; old</span>\n",
            "<span class=\"gs\">---</span>\n",
            "<span class=\"gi\">&gt; new</span>\n",
            "<span class=\"gu\">3,4d2</span>\n",
            "10c10\n",
            "</pre></div>\n"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = highlight_diff("+<script>alert(\"x\") && 1</script>");
        assert!(html.contains(
            "<span class=\"gi\">+&lt;script&gt;alert(&quot;x&quot;) &amp;&amp; 1&lt;/script&gt;</span>"
        ));
    }

    #[test]
    fn test_crlf_and_surrounding_newlines() {
        assert_eq!(
            highlight_diff("\n\n+a\r\n-b\r\n\n"),
            "<div class=\"highlight\"><pre><span class=\"gi\">+a</span>\n<span class=\"gd\">-b</span>\n</pre></div>\n"
        );
    }

    #[test]
    fn test_blank_lines_inside_are_kept() {
        assert_eq!(
            highlight_diff("a\n\nb"),
            "<div class=\"highlight\"><pre>a\n\nb\n</pre></div>\n"
        );
    }
}
