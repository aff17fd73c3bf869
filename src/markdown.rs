//! Markdown rendering

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::error::LoadError;

/// Markdown renderer producing HTML fragments
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Enable most options but NOT YAML metadata blocks
        // Front-matter is handled separately in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_DEFINITION_LIST
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String, LoadError> {
        let parser = Parser::new_ext(markdown, self.options);

        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for (event, range) in parser.into_offset_iter() {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            // The parser closes an open fence silently at the
                            // end of input, so termination is checked against
                            // the block's source range
                            if !has_closing_fence(&markdown[range]) {
                                return Err(LoadError::MarkupRenderError {
                                    reason: "unterminated code fence".to_string(),
                                });
                            }
                            // The class carries only the first token of the info string
                            let lang = info.split_whitespace().next().unwrap_or("");
                            if lang.is_empty() {
                                None
                            } else {
                                Some(lang.to_string())
                            }
                        }
                        CodeBlockKind::Indented => None,
                    };
                    in_code_block = true;
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let rendered =
                        render_code_block(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(rendered)));
                    code_block_lang = None;
                    in_code_block = false;
                }
                Event::Text(text) if in_code_block => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Parse excerpt from content, split at the separator marker
    pub fn split_excerpt(content: &str, separator: &str) -> (Option<String>, String) {
        if let Some(pos) = content.find(separator) {
            let excerpt = content[..pos].trim().to_string();
            let remaining = content[pos + separator.len()..].trim().to_string();
            let full = format!("{}\n\n{}", excerpt, remaining);
            (Some(excerpt), full)
        } else {
            (None, content.to_string())
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit a code block, keeping the language tag as a class for
/// downstream syntax highlighting
fn render_code_block(code: &str, lang: Option<&str>) -> String {
    let escaped = html_escape(code);
    match lang {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            html_escape(lang),
            escaped
        ),
        None => format!("<pre><code>{}</code></pre>", escaped),
    }
}

/// Whether a fenced code block's source ends with a real closing fence.
/// The closing fence uses the same character as the opening fence, runs at
/// least as long, and carries no info string; block-quote markers and
/// indentation in front of it are allowed.
fn has_closing_fence(block: &str) -> bool {
    let mut lines = block.lines();
    let open = match lines.next() {
        Some(line) => line.trim_start_matches(['>', ' ', '\t']),
        None => return false,
    };
    let fence_char = match open.chars().next() {
        Some(c) => c,
        None => return false,
    };
    let open_len = open.chars().take_while(|&c| c == fence_char).count();

    // lines.last() is None when the opening fence is the only line
    let close = match lines.last() {
        Some(line) => line.trim_start_matches(['>', ' ', '\t']),
        None => return false,
    };
    let run = close.chars().take_while(|&c| c == fence_char).count();
    run >= open_len && close[run..].trim().is_empty()
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
