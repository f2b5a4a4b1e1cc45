//! Allow-list HTML sanitizer for user-supplied text.
//!
//! Text is passed through with `<` and `>` escaped. A tag survives only when its
//! name is on [`ALLOWED_TAGS`]; it is re-rendered in canonical form with just the
//! attributes listed for it, so inline event handlers and styles disappear while
//! the tag and its content stay. Every other tag is escaped and shows up as
//! literal text. `&` is left alone, which keeps the output stable under repeated
//! sanitizing.

use regex::Regex;
use std::sync::OnceLock;

/// Tag name and the attributes it may keep.
pub const ALLOWED_TAGS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target"]),
    ("abbr", &["title"]),
    ("b", &[]),
    ("blockquote", &["cite"]),
    ("br", &[]),
    ("code", &[]),
    ("del", &[]),
    ("em", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("hr", &[]),
    ("i", &[]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("ins", &[]),
    ("li", &[]),
    ("mark", &[]),
    ("ol", &[]),
    ("p", &[]),
    ("pre", &[]),
    ("q", &["cite"]),
    ("s", &[]),
    ("small", &[]),
    ("span", &[]),
    ("strong", &[]),
    ("sub", &[]),
    ("sup", &[]),
    ("u", &[]),
    ("ul", &[]),
];

/// Attributes holding a URL; kept only when the URL uses a safe scheme.
const URL_ATTRS: &[&str] = &["href", "src", "cite"];

const SAFE_URL_PREFIXES: &[&str] = &[
    "http://", "https://", "mailto:", "tel:", "#", "/", "./", "../",
];

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static ATTR_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| {
        Regex::new(r"(?s)^(/?)([A-Za-z][A-Za-z0-9]*)((?:\s.*?)?)(/?)\s*$").expect("valid tag pattern")
    })
}

fn attr_re() -> &'static Regex {
    ATTR_RE.get_or_init(|| {
        Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .expect("valid attribute pattern")
    })
}

/// Sanitize `input` for output as HTML. Deterministic and idempotent.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&escape_text(&rest[..start]));
        let candidate = &rest[start..];
        match tag_end(candidate) {
            Some(end) => {
                let raw = &candidate[..=end];
                match render_tag(&raw[1..end]) {
                    Some(tag) => out.push_str(&tag),
                    None => out.push_str(&escape_text(raw)),
                }
                rest = &candidate[end + 1..];
            }
            None => {
                out.push_str("&lt;");
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(&escape_text(rest));
    out
}

fn escape_text(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('"', "&quot;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Byte offset of the `>` closing the tag that starts at `s[0] == '<'`, skipping
/// quoted attribute values. `None` when another `<` comes first or nothing closes it.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices().skip(1) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '<' => return None,
                '>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

fn allowed_attrs(name: &str) -> Option<&'static [&'static str]> {
    ALLOWED_TAGS
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, attrs)| *attrs)
}

fn is_safe_url(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    SAFE_URL_PREFIXES.iter().any(|p| v.starts_with(p))
}

/// Canonical rendering of an allowed tag, or `None` if it must be escaped.
fn render_tag(inner: &str) -> Option<String> {
    let caps = tag_re().captures(inner)?;
    let closing = !caps[1].is_empty();
    let name = caps[2].to_lowercase();
    let attrs = allowed_attrs(&name)?;
    if closing {
        return Some(format!("</{}>", name));
    }

    let mut out = format!("<{}", name);
    for attr in attr_re().captures_iter(&caps[3]) {
        let attr_name = attr[1].to_lowercase();
        if !attrs.contains(&attr_name.as_str()) {
            continue;
        }
        let value = attr.get(2).or_else(|| attr.get(3)).or_else(|| attr.get(4)).map(|m| m.as_str());
        if URL_ATTRS.contains(&attr_name.as_str()) && !value.map(is_safe_url).unwrap_or(false) {
            continue;
        }
        match value {
            Some(v) => out.push_str(&format!(" {}=\"{}\"", attr_name, escape_attr(v))),
            None => out.push_str(&format!(" {}", attr_name)),
        }
    }
    if !caps[4].is_empty() {
        out.push_str(" /");
    }
    out.push('>');
    Some(out)
}
