//! Server-rendered HTML pages.
//!
//! The markup is deliberately plain: page chrome, a search form, cards and a detail layout.
//! All text coming from the CMS or the request is escaped before interpolation.

use scamwatch_core::catalog::preview;
use scamwatch_core::{CatalogEntity, CatalogKind, CatalogView};
use std::fmt::Write;

const SITE_NAME: &str = "Scamwatch";

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a path segment (entity ids are opaque and may contain anything).
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

fn detail_href(kind: CatalogKind, id: &str) -> String {
    format!("/{}/{}", kind.slug(), encode_segment(id))
}

fn layout(title: &str, active: Option<CatalogKind>, body: &str) -> String {
    let mut nav = String::new();
    let home_class = if active.is_none() { " class=\"active\"" } else { "" };
    let _ = write!(nav, "<a href=\"/\"{home_class}>Home</a>");
    for kind in CatalogKind::ALL {
        let class = if active == Some(kind) {
            " class=\"active\""
        } else {
            ""
        };
        let _ = write!(
            nav,
            "<a href=\"/{}\"{class}>{}</a>",
            kind.slug(),
            kind.nav_label()
        );
    }

    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} | {SITE_NAME}</title></head><body>\
<header><a href=\"/\" class=\"brand\">{SITE_NAME}</a><nav>{nav}</nav></header>\
<main>{body}</main>\
<footer><p>Built to protect and educate.</p></footer>\
</body></html>",
        title = escape(title),
    )
}

pub fn render_home() -> String {
    let mut body = String::from(
        "<section class=\"hero\"><h1>Uncover the Scams</h1>\
<p>Navigate the digital landscape with confidence. Learn to identify and protect yourself \
from online scams and manipulative design.</p></section><section class=\"features\">",
    );
    for kind in CatalogKind::ALL {
        let _ = write!(
            body,
            "<article><h2>{}</h2><p>{}</p><a href=\"/{}\">Explore {}</a></article>",
            kind.nav_label(),
            kind.subtitle(),
            kind.slug(),
            kind.nav_label()
        );
    }
    body.push_str("</section>");
    layout("Home", None, &body)
}

/// Render a catalog page: loading indicator, detail view or list view.
pub fn render_catalog<T: CatalogEntity>(view: &CatalogView<T>) -> String {
    let kind = T::KIND;
    if view.is_loading() {
        let body = format!("<p class=\"loading\">{}</p>", kind.loading_message());
        return layout(kind.title(), Some(kind), &body);
    }
    match view.selection() {
        Some(item) => render_detail(item),
        None => render_list(view),
    }
}

fn render_list<T: CatalogEntity>(view: &CatalogView<T>) -> String {
    let kind = T::KIND;
    let mut body = String::new();

    let _ = write!(
        body,
        "<section class=\"catalog-header\"><h1>{}</h1><p>{}</p>",
        kind.title(),
        kind.subtitle()
    );
    let _ = write!(
        body,
        "<form method=\"get\" action=\"/{}\" class=\"filters\">\
<input type=\"search\" name=\"q\" placeholder=\"Search {}...\" value=\"{}\">\
<select name=\"category\">",
        kind.slug(),
        kind.slug().replace('-', " "),
        escape(view.query())
    );
    let selected_category = view.category().as_str();
    let _ = write!(
        body,
        "<option value=\"all\"{}>All Categories</option>",
        if selected_category == "all" { " selected" } else { "" }
    );
    for category in view.category_options() {
        let selected = if category == selected_category {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            body,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape(category)
        );
    }
    body.push_str("</select><button type=\"submit\">Filter</button></form></section>");

    let visible = view.visible();
    if visible.is_empty() {
        let _ = write!(
            body,
            "<section class=\"empty\"><h3>{}</h3>\
<p>Try adjusting your search or filter criteria</p></section>",
            kind.empty_message()
        );
    } else {
        body.push_str("<section class=\"cards\">");
        for item in visible {
            render_card(&mut body, item);
        }
        body.push_str("</section>");
    }

    layout(kind.title(), Some(kind), &body)
}

fn render_card<T: CatalogEntity>(body: &mut String, item: &T) {
    let kind = T::KIND;
    let name = escape(item.name().unwrap_or_default());
    body.push_str("<article class=\"card\">");
    let _ = write!(body, "<h2>{name}</h2>");
    if let Some(category) = non_empty(item.category()) {
        let _ = write!(body, "<span class=\"badge\">{}</span>", escape(category));
    }
    let _ = write!(
        body,
        "<p>{}</p>",
        escape(&preview(item.primary_description()))
    );
    if let Some(src) = non_empty(item.visual_example_ref()) {
        let _ = write!(
            body,
            "<img src=\"{}\" alt=\"Preview of {name}\" width=\"300\">",
            escape(src)
        );
    }
    let _ = write!(
        body,
        "<a href=\"{}\">Learn More</a></article>",
        escape(&detail_href(kind, item.id().as_str()))
    );
}

fn render_detail<T: CatalogEntity>(item: &T) -> String {
    let kind = T::KIND;
    let name = item.name().unwrap_or_default();
    let mut body = String::new();

    let _ = write!(
        body,
        "<a href=\"/{}\" class=\"back\">Back to {}</a><h1>{}</h1>",
        kind.slug(),
        kind.nav_label(),
        escape(name)
    );
    if let Some(category) = non_empty(item.category()) {
        let _ = write!(body, "<span class=\"badge\">{}</span>", escape(category));
    }
    for (heading, text) in item.detail_sections() {
        let _ = write!(
            body,
            "<section><h2>{heading}</h2><p>{}</p></section>",
            escape(text)
        );
    }
    if let Some(src) = non_empty(item.visual_example_ref()) {
        let _ = write!(
            body,
            "<section><h2>Visual Example</h2>\
<img src=\"{}\" alt=\"Visual example of {}\" width=\"600\"></section>",
            escape(src),
            escape(name)
        );
    }

    let title = if name.is_empty() { kind.noun() } else { name };
    layout(title, Some(kind), &body)
}
