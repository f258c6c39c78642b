//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to an HTML fragment with GFM extensions enabled
/// (tables, strikethrough, task lists).
#[must_use]
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_GFM);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Wrap a rendered fragment in a minimal standalone page shell.
#[must_use]
pub(crate) fn wrap_page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!doctype html>\n",
            "<html>\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n",
            "</head>\n<body>\n{body}\n</body>\n</html>\n",
        ),
        title = escape_title(title),
        body = body,
    )
}

fn escape_title(title: &str) -> String {
    title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
