//! Markdown rendering with syntax highlighting
//!
//! The pipeline runs in a fixed order for every document:
//! asset references are rewritten in the source text, the text is parsed
//! with the GFM extensions, headings receive ids, author-written HTML is
//! sanitized, fenced code is highlighted, and the events are serialized.

use lazy_static::lazy_static;
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use regex::{Captures, Regex};
use std::borrow::Cow;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::item::ContentKind;
use super::toc::HeadingSlugger;
use crate::config::AssetRoute;
use crate::helpers::{decode_entities, html_escape, url_join};

lazy_static! {
    /// `![alt](./path)` in markdown source
    static ref MD_RELATIVE_IMAGE: Regex = Regex::new(r"!\[([^\]]*)\]\(\./([^)]+)\)").unwrap();
    /// `src="./assets/..."` / `poster='./assets/...'` in inline HTML
    static ref HTML_ASSET_ATTR: Regex =
        Regex::new(r#"\b(src|poster)=(["'])\./assets/"#).unwrap();
    static ref BARE_URL: Regex = Regex::new(r"(?:https?://|www\.)[^\s<]+").unwrap();
    static ref HTML_TAG: Regex = Regex::new(
        r#"<(/?)([a-zA-Z][a-zA-Z0-9]*)((?:[^<>"']|"[^"]*"|'[^']*')*)>"#
    )
    .unwrap();
    static ref HTML_COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref HTML_ATTR: Regex = Regex::new(
        r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#
    )
    .unwrap();
}

/// Raw HTML elements that survive sanitization
const ALLOWED_TAGS: [&str; 8] = [
    "img",
    "video",
    "audio",
    "source",
    "picture",
    "figure",
    "figcaption",
    "br",
];

/// Attributes kept on allowed elements
const ALLOWED_ATTRS: [&str; 13] = [
    "src",
    "poster",
    "alt",
    "title",
    "width",
    "height",
    "controls",
    "autoplay",
    "loop",
    "muted",
    "playsinline",
    "type",
    "preload",
];

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    route: AssetRoute,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new(route: AssetRoute) -> Self {
        Self::with_theme(route, "base16-ocean.dark")
    }

    /// Create with a specific highlighting theme
    pub fn with_theme(route: AssetRoute, theme: &str) -> Self {
        let theme_set = ThemeSet::load_defaults();
        if !theme_set.themes.contains_key(theme) {
            tracing::warn!("Unknown highlight theme {:?}, code will not be colored", theme);
        }
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set,
            theme_name: theme.to_string(),
            route,
        }
    }

    /// Render a markdown body to sanitized HTML
    ///
    /// Never fails: syntax the parser does not understand comes out as
    /// literal text.
    pub fn render(&self, markdown: &str, kind: ContentKind, slug: &str) -> String {
        let base_url = url_join(self.route.prefix(), &[kind.dir_name(), slug]);
        let source = rewrite_asset_refs(markdown, &base_url);

        let events = parse(&source);
        let events = assign_heading_ids(events);
        let events = sanitize(events);
        let events = self.highlight_code_blocks(events);

        let mut html_output = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    fn highlight_code_blocks<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => code_language(&info),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        out.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                other => out.push(other),
            }
        }

        out
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let class_attr = lang
            .map(|l| format!(r#" class="language-{}""#, l))
            .unwrap_or_default();

        let highlighted = match (lang, self.theme()) {
            (Some(lang), Some(theme)) => self.highlight_lines(code, lang, theme).ok(),
            _ => None,
        };

        let body = highlighted.unwrap_or_else(|| html_escape(code));
        format!(r#"<pre class="highlight"><code{}>{}</code></pre>"#, class_attr, body)
    }

    fn highlight_lines(
        &self,
        code: &str,
        lang: &str,
        theme: &Theme,
    ) -> Result<String, syntect::Error> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut html_output = String::with_capacity(code.len() * 4);
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &self.syntax_set)?;
            html_output.push_str(&styled_line_to_highlighted_html(
                &regions[..],
                IncludeBackground::No,
            )?);
        }
        Ok(html_output)
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme_set.themes.get(&self.theme_name)
    }
}

/// Point relative media references at the item's served asset URLs
///
/// Fenced code blocks are copied untouched so samples keep their paths.
pub fn rewrite_asset_refs<'a>(markdown: &'a str, base_url: &str) -> Cow<'a, str> {
    if !MD_RELATIVE_IMAGE.is_match(markdown) && !HTML_ASSET_ATTR.is_match(markdown) {
        return Cow::Borrowed(markdown);
    }

    let mut out = String::with_capacity(markdown.len() + 64);
    let mut prose_start = 0;
    let mut offset = 0;
    // opening run and byte offset of the fence being copied
    let mut fence: Option<(&str, usize)> = None;

    for line in markdown.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        match fence {
            Some((open, code_start)) => {
                let closes = fence_run(line)
                    .is_some_and(|run| run.starts_with(open) && line.trim() == run);
                if closes {
                    out.push_str(&markdown[code_start..offset]);
                    fence = None;
                    prose_start = offset;
                }
            }
            None => {
                if let Some(run) = fence_run(line) {
                    out.push_str(&rewrite_prose(&markdown[prose_start..line_start], base_url));
                    fence = Some((run, line_start));
                }
            }
        }
    }

    match fence {
        Some((_, code_start)) => out.push_str(&markdown[code_start..]),
        None => out.push_str(&rewrite_prose(&markdown[prose_start..], base_url)),
    }
    Cow::Owned(out)
}

fn rewrite_prose(text: &str, base_url: &str) -> String {
    let text = MD_RELATIVE_IMAGE.replace_all(text, |caps: &Captures| {
        format!("![{}]({}/{})", &caps[1], base_url, &caps[2])
    });
    HTML_ASSET_ATTR
        .replace_all(&text, |caps: &Captures| {
            format!("{}={}{}/assets/", &caps[1], &caps[2], base_url)
        })
        .into_owned()
}

/// Backtick or tilde run of three or more opening a code fence
fn fence_run(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let trimmed = &line[indent..];
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.len() - trimmed.trim_start_matches(marker).len();
    (len >= 3).then(|| &trimmed[..len])
}

/// Parse with the GFM extensions, turning bare URLs into links
fn parse(markdown: &str) -> Vec<Event<'_>> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;

    let mut events = Vec::new();
    // Links, images and code blocks must not get nested links
    let mut opaque_depth = 0usize;

    // Adjacent text is merged so a URL is never split across events
    for event in TextMergeStream::new(Parser::new_ext(markdown, options)) {
        match event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => {
                opaque_depth += 1;
                events.push(event);
            }
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                opaque_depth = opaque_depth.saturating_sub(1);
                events.push(event);
            }
            Event::Text(text) if opaque_depth == 0 => match autolink(&text) {
                Some(linked) => events.extend(linked),
                None => events.push(Event::Text(text)),
            },
            other => events.push(other),
        }
    }

    events
}

/// Split a text run around bare URLs
fn autolink(text: &str) -> Option<Vec<Event<'static>>> {
    if !BARE_URL.is_match(text) {
        return None;
    }

    let mut events = Vec::new();
    let mut last = 0;
    for m in BARE_URL.find_iter(text) {
        let url = trim_url(m.as_str());
        if url.len() <= "www.".len() {
            continue;
        }
        let start = m.start();
        let end = start + url.len();
        if start > last {
            events.push(Event::Text(CowStr::from(text[last..start].to_string())));
        }
        let dest = if url.starts_with("www.") {
            format!("http://{}", url)
        } else {
            url.to_string()
        };
        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(dest),
            title: CowStr::from(""),
            id: CowStr::from(""),
        }));
        events.push(Event::Text(CowStr::from(url.to_string())));
        events.push(Event::End(TagEnd::Link));
        last = end;
    }
    if last < text.len() {
        events.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
    Some(events)
}

/// Drop trailing punctuation that belongs to the sentence, not the URL
fn trim_url(url: &str) -> &str {
    let mut url = url;
    loop {
        let Some(last) = url.chars().last() else {
            return url;
        };
        let unbalanced_paren =
            last == ')' && url.matches('(').count() < url.matches(')').count();
        if ".,:;!?*_~'\"".contains(last) || unbalanced_paren {
            url = &url[..url.len() - last.len_utf8()];
        } else {
            return url;
        }
    }
}

/// Give every heading a unique id derived from its text
fn assign_heading_ids(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut slugger = HeadingSlugger::new();
    let mut out = Vec::with_capacity(events.len());
    let mut iter = events.into_iter();

    while let Some(event) = iter.next() {
        let (level, classes, attrs) = match event {
            Event::Start(Tag::Heading {
                level,
                classes,
                attrs,
                ..
            }) => (level, classes, attrs),
            other => {
                out.push(other);
                continue;
            }
        };

        let mut inner = Vec::new();
        let mut text = String::new();
        let mut end = None;
        for inner_event in iter.by_ref() {
            if matches!(inner_event, Event::End(TagEnd::Heading(_))) {
                end = Some(inner_event);
                break;
            }
            if let Event::Text(t) | Event::Code(t) = &inner_event {
                text.push_str(t);
            }
            inner.push(inner_event);
        }

        out.push(Event::Start(Tag::Heading {
            level,
            id: Some(CowStr::from(slugger.slug(&text))),
            classes,
            attrs,
        }));
        out.append(&mut inner);
        out.extend(end);
    }

    out
}

/// Escape raw HTML outside the media allow-list and neutralize unsafe URLs
///
/// Consecutive block HTML events are joined first so tags spanning
/// several lines are seen whole.
fn sanitize(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut html_block = String::new();

    for event in events {
        if let Event::Html(raw) = &event {
            html_block.push_str(raw);
            continue;
        }
        if !html_block.is_empty() {
            out.push(Event::Html(CowStr::from(sanitize_html(&html_block))));
            html_block.clear();
        }

        out.push(match event {
            Event::InlineHtml(raw) => Event::InlineHtml(CowStr::from(sanitize_html(&raw))),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) if !is_safe_url(&dest_url, false) => Event::Start(Tag::Link {
                link_type,
                dest_url: CowStr::from("#"),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) if !is_safe_url(&dest_url, true) => Event::Start(Tag::Image {
                link_type,
                dest_url: CowStr::from(""),
                title,
                id,
            }),
            other => other,
        });
    }
    if !html_block.is_empty() {
        out.push(Event::Html(CowStr::from(sanitize_html(&html_block))));
    }

    out
}

/// Rebuild allowed tags attribute by attribute, escape everything else
fn sanitize_html(raw: &str) -> String {
    let raw = HTML_COMMENT.replace_all(raw, "");
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;

    for caps in HTML_TAG.captures_iter(&raw) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&escape_angles(&raw[last..whole.start()]));
        last = whole.end();

        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();
        if !ALLOWED_TAGS.contains(&name.as_str()) {
            out.push_str(&html_escape(whole.as_str()));
            continue;
        }
        if closing {
            out.push_str(&format!("</{}>", name));
            continue;
        }

        out.push('<');
        out.push_str(&name);
        for attr in HTML_ATTR.captures_iter(&caps[3]) {
            let attr_name = attr[1].to_ascii_lowercase();
            if !ALLOWED_ATTRS.contains(&attr_name.as_str()) {
                continue;
            }
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map(|m| decode_entities(m.as_str()));
            let is_url = attr_name == "src" || attr_name == "poster";
            match value {
                Some(v) if is_url && !is_safe_url(&v, true) => {}
                Some(v) => {
                    out.push_str(&format!(r#" {}="{}""#, attr_name, html_escape(&v)));
                }
                None => out.push_str(&format!(" {}", attr_name)),
            }
        }
        out.push('>');
    }

    out.push_str(&escape_angles(&raw[last..]));
    out
}

fn escape_angles(s: &str) -> Cow<'_, str> {
    if s.contains(['<', '>']) {
        Cow::Owned(s.replace('<', "&lt;").replace('>', "&gt;"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Reject script-capable URL schemes; relative URLs are always fine
fn is_safe_url(url: &str, is_media: bool) -> bool {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return true;
    };
    let scheme = &url[..colon];
    if scheme.contains(['/', '?', '#']) {
        // the colon sits in the path, no scheme present
        return true;
    }
    match scheme.to_ascii_lowercase().as_str() {
        "http" | "https" | "mailto" | "tel" => true,
        "data" => is_media && url[colon + 1..].trim_start().starts_with("image/"),
        _ => false,
    }
}

/// First word of a fence info string, restricted to safe characters
fn code_language(info: &str) -> Option<String> {
    let lang: String = info
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#' | '.'))
        .collect();
    if lang.is_empty() {
        None
    } else {
        Some(lang)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(AssetRoute::Content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::default().render(markdown, ContentKind::Blog, "hello")
    }

    #[test]
    fn test_render_basic_markdown() {
        let html = render("# Hello World\n\nThis is a test.");
        assert!(html.contains(r#"<h1 id="hello-world">Hello World</h1>"#));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_heading_collisions() {
        let html = render("## Setup\n\ntext\n\n## Setup\n\n### Setup");
        assert!(html.contains(r#"<h2 id="setup">"#));
        assert!(html.contains(r#"<h2 id="setup-1">"#));
        assert!(html.contains(r#"<h3 id="setup-2">"#));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let html = render("## The `render` call");
        assert!(html.contains(r#"id="the-render-call""#));
    }

    #[test]
    fn test_render_code_block() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<pre class="highlight"><code class="language-rust">"#));
        assert!(html.contains("<span style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_still_renders() {
        let html = render("```nosuchlang\n<tag> & more\n```");
        assert!(html.contains(r#"class="language-nosuchlang""#));
        assert!(html.contains("&lt;tag&gt;"));
    }

    #[test]
    fn test_plain_code_block_is_escaped() {
        let html = render("    let x = a < b;\n");
        assert!(html.contains(r#"<pre class="highlight"><code>let x = a &lt; b;"#));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains(r#"type="checkbox""#));
    }

    #[test]
    fn test_autolinks_bare_urls() {
        let html = render("See https://example.com/docs. Or www.rust-lang.org");
        assert!(html.contains(r#"<a href="https://example.com/docs">https://example.com/docs</a>."#));
        assert!(html.contains(r#"<a href="http://www.rust-lang.org">www.rust-lang.org</a>"#));
    }

    #[test]
    fn test_autolink_keeps_underscores_and_parens() {
        let html = render("Wiki https://en.wikipedia.org/wiki/Rust_(programming_language) here");
        let url = "https://en.wikipedia.org/wiki/Rust_(programming_language)";
        assert!(html.contains(&format!(r#"<a href="{0}">{0}</a> here"#, url)));
    }

    #[test]
    fn test_existing_links_not_relinked() {
        let html = render("[site](https://example.com)");
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_rewrites_relative_images() {
        let html = render("![diagram](./assets/diagram.png)");
        assert!(html.contains(r#"src="/content/blogs/hello/assets/diagram.png""#));
        assert!(html.contains(r#"alt="diagram""#));
    }

    #[test]
    fn test_rewrites_video_src_and_poster() {
        let html = render(
            "<video controls src=\"./assets/demo.mp4\" poster=\"./assets/poster.jpg\" onplay=\"x()\"></video>",
        );
        assert!(html.contains(r#"src="/content/blogs/hello/assets/demo.mp4""#));
        assert!(html.contains(r#"poster="/content/blogs/hello/assets/poster.jpg""#));
        assert!(html.contains("controls"));
        assert!(!html.contains("onplay"));
    }

    #[test]
    fn test_api_route_rewrites() {
        let renderer = MarkdownRenderer::new(AssetRoute::Api);
        let html = renderer.render("![a](./assets/a.png)", ContentKind::Project, "p");
        assert!(html.contains(r#"src="/api/content/projects/p/assets/a.png""#));
    }

    #[test]
    fn test_script_is_escaped() {
        let html = render("<script>alert('x')</script>\n\nok <b>bold</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_multiline_media_tag() {
        let html = render("<figure>\n<img\n  src=\"./assets/a.png\"\n  onerror=\"x()\">\n</figure>\n");
        assert!(html.contains("<figure>"));
        assert!(html.contains(r#"<img src="/content/blogs/hello/assets/a.png">"#));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_javascript_links_neutralized() {
        let html = render("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_entity_encoded_scheme_dropped() {
        let html = render("<img src=\"&#106;avascript:alert(1)\" alt=\"x\">");
        assert!(!html.contains("avascript:"));
        assert!(html.contains(r#"<img alt="x">"#));

        let html = render("<video poster=\"javascript&colon;alert(1)\" controls></video>");
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_encoded_attribute_reescaped() {
        let html = render("<img src=\"./assets/a.png?w=1&amp;h=2\">");
        assert!(html.contains(r#"src="/content/blogs/hello/assets/a.png?w=1&amp;h=2""#));
    }

    #[test]
    fn test_code_fence_paths_untouched() {
        let md = "![a](./assets/a.png)\n\n```markdown\n![b](./assets/b.png)\n```\n\n![c](./assets/c.png)";
        let rewritten = rewrite_asset_refs(md, "/content/blogs/x");
        assert!(rewritten.contains("![a](/content/blogs/x/assets/a.png)"));
        assert!(rewritten.contains("```markdown\n![b](./assets/b.png)\n```"));
        assert!(rewritten.contains("![c](/content/blogs/x/assets/c.png)"));

        let unclosed = "~~~~\n<img src=\"./assets/d.png\">\n~~~\n";
        assert_eq!(rewrite_asset_refs(unclosed, "/content/blogs/x"), unclosed);
    }

    #[test]
    fn test_render_is_deterministic() {
        let md = "# Title\n\n## Title\n\n```python\nprint('hi')\n```\n\n![x](./assets/x.png)";
        let renderer = MarkdownRenderer::default();
        let first = renderer.render(md, ContentKind::Blog, "s");
        let second = renderer.render(md, ContentKind::Blog, "s");
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_markdown_degrades() {
        let html = render("[unclosed link(\n\n**not bold\n\n<div");
        assert!(html.contains("[unclosed link("));
        assert!(html.contains("**not bold"));
    }

    #[test]
    fn test_rewrite_asset_refs_untouched() {
        let md = "![remote](https://example.com/a.png)";
        assert!(matches!(
            rewrite_asset_refs(md, "/content/blogs/x"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com", false));
        assert!(is_safe_url("/relative/path", false));
        assert!(is_safe_url("page#a:b", false));
        assert!(is_safe_url("data:image/png;base64,AAAA", true));
        assert!(!is_safe_url("data:text/html,<x>", true));
        assert!(!is_safe_url("JavaScript:alert(1)", false));
    }

    #[test]
    fn test_code_language() {
        assert_eq!(code_language("rust ignore"), Some("rust".to_string()));
        assert_eq!(code_language("c++"), Some("c++".to_string()));
        assert_eq!(code_language("\"><script>"), Some("script".to_string()));
        assert_eq!(code_language(""), None);
    }
}
