use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// URL schemes a rendered link or image may use. Anything without a scheme is relative.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render note content as HTML.
///
/// Raw HTML in the source is escaped and shown as text. Link and image
/// destinations with any other scheme than http, https or mailto become `#`.
pub fn render_markdown(source: &str) -> String {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn safe_url(dest: CowStr<'_>) -> CowStr<'_> {
    // Browsers skip whitespace and control characters inside a scheme
    let normalized: String = dest
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let scheme_end = normalized.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if normalized[i..].starts_with(':') => {
            let scheme = normalized[..i].to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                dest
            } else {
                tracing::debug!("Dropped link with scheme {}", scheme);
                CowStr::Borrowed("#")
            }
        }
        _ => dest,
    }
}
