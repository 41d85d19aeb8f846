//! Template engine for rendering the tutorial page.
//!
//! Auto-escaping is off. Text values go through the `text` filter, which
//! escapes only `&`, `<` and `>` so example code keeps its slashes and quotes.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::entry::SourceEntry;

/// Context for rendering the tutorial page.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    /// Page title
    pub title: &'a str,
    /// Inline stylesheet
    pub stylesheet: &'a str,
    /// Entries in display order
    pub entries: &'a [SourceEntry],
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the page template loaded.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("text", escape_text);
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render the full tutorial page.
    pub fn render_page(&self, context: &PageContext<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template(PAGE_TEMPLATE_NAME)?.render(context)
    }
}

/// Escape a value for use as HTML element text.
fn escape_text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

const PAGE_TEMPLATE_NAME: &str = "tutorial.html";

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title | text }}</title>
  <style>
{{ stylesheet }}
  </style>
</head>
<body>
{% for entry in entries %}<h2>{{ entry.title | text }}</h2>
<pre><code>{{ entry.body | text }}</code></pre>
{% endfor %}</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, body: &str) -> SourceEntry {
        SourceEntry {
            file_name: format!("{}.oct", title.replace(' ', "_")),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn render(entries: &[SourceEntry]) -> String {
        let engine = TemplateEngine::new().unwrap();
        engine
            .render_page(&PageContext {
                title: "Music Sequences",
                stylesheet: "body { margin: 0; }",
                entries,
            })
            .unwrap()
    }

    #[test]
    fn renders_document_skeleton() {
        let html = render(&[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Music Sequences</title>"));
        assert!(html.contains("body { margin: 0; }"));
        assert!(html.contains("<body>\n</body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn renders_one_section_per_entry() {
        let html = render(&[entry("first", "a b c"), entry("second", "d e f")]);

        assert_eq!(html.matches("<h2>").count(), 2);
        assert_eq!(html.matches("<pre><code>").count(), 2);
        assert!(html.contains("<h2>first</h2>\n<pre><code>a b c</code></pre>"));

        let first = html.find("<h2>first</h2>").unwrap();
        let second = html.find("<h2>second</h2>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn escapes_entry_text() {
        let html = render(&[entry("a <b>", "if x < 3 & y > 2")]);

        assert!(html.contains("<h2>a &lt;b&gt;</h2>"));
        assert!(html.contains("if x &lt; 3 &amp; y &gt; 2"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn escapes_page_title() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render_page(&PageContext {
                title: "Rock & Roll",
                stylesheet: "",
                entries: &[],
            })
            .unwrap();

        assert!(html.contains("<title>Rock &amp; Roll</title>"));
    }

    #[test]
    fn keeps_plain_text_verbatim() {
        let body = "// it's a loop\ntempo 120 \"swing\"\n\n  loop 4\n    c e g 1/4\n  end\n";
        let html = render(&[entry("loop", body)]);

        assert!(html.contains(&format!("<pre><code>{}</code></pre>", body)));
    }
}
