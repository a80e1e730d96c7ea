//! Markdown to HTML rendering for description fragments.
//!
//! Fenced code blocks are emitted as `<pre><code>` with a `language-*`
//! class; the code text itself is opaque display content and is only
//! escaped, never parsed.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::escape::escape_html;

/// Render a markdown fragment to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);

    // Process events, handling code blocks specially
    let parser = CodeBlockWrapper::new(parser);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Iterator adapter that replaces code-block events with a single
/// pre-rendered HTML block carrying the language class.
struct CodeBlockWrapper<'a, I> {
    inner: I,
    in_code_block: bool,
    code_lang: Option<String>,
    code_buffer: String,
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a, I> CodeBlockWrapper<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn new(inner: I) -> Self {
        Self {
            inner,
            in_code_block: false,
            code_lang: None,
            code_buffer: String::new(),
            _marker: std::marker::PhantomData,
        }
    }

    fn wrap_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang_class = lang
            .map(|l| format!(" class=\"language-{}\"", l))
            .unwrap_or_default();

        format!("<pre><code{}>{}</code></pre>", lang_class, escape_html(code))
    }
}

impl<'a, I> Iterator for CodeBlockWrapper<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.inner.next()?;

            match &event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    self.in_code_block = true;
                    self.code_buffer.clear();
                    self.code_lang = match kind {
                        pulldown_cmark::CodeBlockKind::Fenced(lang) => {
                            let lang_str = lang.as_ref();
                            if lang_str.is_empty() {
                                None
                            } else {
                                Some(lang_str.to_string())
                            }
                        }
                        pulldown_cmark::CodeBlockKind::Indented => None,
                    };
                    continue;
                }
                Event::End(TagEnd::CodeBlock) => {
                    self.in_code_block = false;
                    let wrapped = self.wrap_code(&self.code_buffer, self.code_lang.as_deref());
                    return Some(Event::Html(wrapped.into()));
                }
                Event::Text(text) if self.in_code_block => {
                    self.code_buffer.push_str(text);
                    continue;
                }
                _ => return Some(event),
            }
        }
    }
}
