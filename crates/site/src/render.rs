//! Leptos SSR components for documentation pages.
//!
//! These components are designed for server-side rendering without signals.
//! They take plain data and render to HTML: the same registry and entry
//! always produce the same output. Optional content degrades to omitted
//! sections; nothing here can fail for content reasons.

use leptos::prelude::*;

use hookform_content::data::{API, FAQ, GET_STARTED};
use hookform_content::{CodeSample, ContentEntry, ExternalLink, Registry, SampleVariant};

use crate::assets;
use crate::markdown::render_markdown;

/// Site name shown in the nav header and page titles.
const SITE_NAME: &str = "React Hook Form";

/// Relative href for an entry or listing page in the flat site layout.
pub fn page_href(key: &str) -> String {
    format!("{key}.html")
}

/// Display title for a listing collection.
pub fn listing_title(collection: &str) -> &'static str {
    match collection {
        API => "API Reference",
        GET_STARTED => "Get Started",
        FAQ => "FAQs",
        _ => "Documentation",
    }
}

/// Render a single-topic page (one API entry) to an HTML document.
pub fn render_entry_page(registry: &Registry, entry: &ContentEntry) -> String {
    let registry = registry.clone();
    let entry = entry.clone();

    let owner = Owner::new();
    owner.with(|| view! { <ApiPage registry=registry entry=entry/> }.to_html())
}

/// Render a listing page (FAQ, get-started) to an HTML document.
pub fn render_listing_page(registry: &Registry, collection: &str) -> String {
    let registry = registry.clone();
    let collection = collection.to_string();

    let owner = Owner::new();
    owner.with(|| view! { <ListingPage registry=registry collection=collection/> }.to_html())
}

/// Render the home page to an HTML document.
pub fn render_home_page(registry: &Registry) -> String {
    let registry = registry.clone();

    let owner = Owner::new();
    owner.with(|| view! { <HomePage registry=registry/> }.to_html())
}

/// Render the not-found page to an HTML document.
pub fn render_not_found_page(registry: &Registry, path: &str) -> String {
    let registry = registry.clone();
    let path = path.to_string();

    let owner = Owner::new();
    owner.with(|| view! { <NotFoundPage registry=registry path=path/> }.to_html())
}

/// Common page shell: head, stylesheet, navigation and footer.
#[component]
fn PageShell(
    /// Text for the `<title>` element
    title: String,
    /// The content registry (drives the navigation)
    registry: Registry,
    /// Key of the current page, for nav highlighting
    current_key: String,
    children: Children,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="UTF-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
                <title>{title}</title>
                <style>{assets::STYLES_CSS}</style>
            </head>
            <body>
                <div class="site-layout">
                    <SiteNav registry=registry current_key=current_key/>
                    <main class="page-content">
                        {children()}
                        <SiteFooter/>
                    </main>
                </div>
            </body>
        </html>
    }
}

/// Sidebar navigation built from the registry's collection order.
#[component]
fn SiteNav(registry: Registry, current_key: String) -> impl IntoView {
    let api_entries: Vec<ContentEntry> = registry.list(API).to_vec();
    let guide_pages: Vec<(String, String)> = vec![
        (GET_STARTED.to_string(), listing_title(GET_STARTED).to_string()),
        (FAQ.to_string(), listing_title(FAQ).to_string()),
    ];
    let current_for_guides = current_key.clone();

    view! {
        <nav class="site-nav">
            <div class="nav-header">
                <h1><a href=page_href("index")>{SITE_NAME}</a></h1>
            </div>
            <div class="nav-section">
                <h4 class="nav-section-header">"Guides"</h4>
                <ul class="nav-items">
                    {guide_pages
                        .into_iter()
                        .map(|(key, label)| {
                            let class = if key == current_for_guides { "current" } else { "" };
                            view! {
                                <li class=class>
                                    <a href=page_href(&key)>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="nav-section">
                <h4 class="nav-section-header">"API"</h4>
                <ul class="nav-items">
                    {api_entries
                        .into_iter()
                        .map(|entry| {
                            let class = if entry.key == current_key { "current" } else { "" };
                            view! {
                                <li class=class>
                                    <a href=page_href(&entry.key)>{entry.title.clone()}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Shared footer navigation.
#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <a href=page_href("index")>"Home"</a>
            <a href=page_href(GET_STARTED)>"Get Started"</a>
            <a href=page_href(FAQ)>"FAQs"</a>
            <a
                href="https://github.com/react-hook-form/react-hook-form"
                target="_blank"
                rel="noopener noreferrer"
            >
                "GitHub"
            </a>
        </footer>
    }
}

/// Single-topic page: heading, signature, description, code area, links.
#[component]
pub fn ApiPage(registry: Registry, entry: ContentEntry) -> impl IntoView {
    let title = format!("{} - {}", entry.title, SITE_NAME);
    let description_html = render_markdown(&entry.description);
    // A dangling sample key is a validation defect; at render time it
    // degrades to an omitted section.
    let sample: Option<CodeSample> = entry
        .code_sample
        .as_deref()
        .and_then(|key| registry.samples().get(key).ok())
        .cloned();
    let has_links = !entry.links.is_empty();
    let links = entry.links.clone();

    view! {
        <PageShell title=title registry=registry current_key=entry.key.clone()>
            <article class="topic">
                <h1 id="main">{entry.title.clone()}</h1>
                {entry
                    .signature
                    .clone()
                    .map(|sig| view! { <pre class="signature"><code>{sig}</code></pre> })}
                <div class="description" inner_html=description_html/>
                {sample.map(|sample| view! { <CodeArea sample=sample/> })}
                {if has_links {
                    Some(view! { <LinkList links=links/> })
                } else {
                    None
                }}
            </article>
        </PageShell>
    }
}

/// Listing page: every entry of a collection as an anchored section.
#[component]
pub fn ListingPage(registry: Registry, collection: String) -> impl IntoView {
    let title = format!("{} - {}", listing_title(&collection), SITE_NAME);
    let heading = listing_title(&collection);
    let entries: Vec<ContentEntry> = registry.list(&collection).to_vec();
    let registry_for_sections = registry.clone();

    view! {
        <PageShell title=title registry=registry current_key=collection.clone()>
            <article class="topic">
                <h1 id="main">{heading}</h1>
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! { <ListingSection registry=registry_for_sections.clone() entry=entry/> }
                    })
                    .collect_view()}
            </article>
        </PageShell>
    }
}

/// One section of a listing page.
#[component]
fn ListingSection(registry: Registry, entry: ContentEntry) -> impl IntoView {
    let description_html = render_markdown(&entry.description);
    let sample: Option<CodeSample> = entry
        .code_sample
        .as_deref()
        .and_then(|key| registry.samples().get(key).ok())
        .cloned();
    let has_links = !entry.links.is_empty();
    let links = entry.links.clone();
    let anchor = entry.key.clone();

    view! {
        <section class="listing-section" id=anchor.clone()>
            <h2>
                {entry.title.clone()}
                <a href=format!("#{anchor}") class="anchor">"\u{00a7}"</a>
            </h2>
            <div class="description" inner_html=description_html/>
            {sample.map(|sample| view! { <CodeArea sample=sample/> })}
            {if has_links {
                Some(view! { <LinkList links=links/> })
            } else {
                None
            }}
        </section>
    }
}

/// Code area: one block per present variant, each with its sandbox link.
#[component]
pub fn CodeArea(sample: CodeSample) -> impl IntoView {
    let typed_body = sample.typed_body.clone();
    let typed_sandbox = sample.typed_sandbox_url.clone();

    view! {
        <div class="code-area">
            <CodeBlock
                label=SampleVariant::Default.display_name()
                body=sample.body.clone()
                lang="language-javascript"
                sandbox_url=sample.sandbox_url.clone()
            />
            {typed_body.map(|body| view! {
                <CodeBlock
                    label=SampleVariant::Typed.display_name()
                    body=body
                    lang="language-typescript"
                    sandbox_url=typed_sandbox
                />
            })}
        </div>
    }
}

/// A single code block with an optional external sandbox link.
#[component]
fn CodeBlock(
    label: &'static str,
    body: String,
    lang: &'static str,
    sandbox_url: Option<String>,
) -> impl IntoView {
    view! {
        <div class="code-block">
            <div class="code-block-header">
                <span class="code-label">{label}</span>
                {sandbox_url.map(|url| view! {
                    <a
                        class="sandbox-link"
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Open in CodeSandbox"
                    </a>
                })}
            </div>
            <pre><code class=lang>{body}</code></pre>
        </div>
    }
}

/// External links attached to an entry, in authored order.
#[component]
fn LinkList(links: Vec<ExternalLink>) -> impl IntoView {
    view! {
        <div class="external-links">
            <h2>"Resources"</h2>
            <ul>
                {links
                    .into_iter()
                    .map(|link| view! {
                        <li>
                            <a href=link.url target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Home page: tagline plus one link table per collection.
#[component]
pub fn HomePage(registry: Registry) -> impl IntoView {
    let title = SITE_NAME.to_string();
    let sections: Vec<(String, Vec<ContentEntry>)> = registry
        .collections()
        .iter()
        .map(|c| (c.key.clone(), c.entries.clone()))
        .collect();

    view! {
        <PageShell title=title registry=registry current_key="index".to_string()>
            <article class="topic">
                <h1 id="main">{SITE_NAME}</h1>
                <p class="home-intro">
                    "Performant, flexible and extensible forms with easy-to-use validation."
                </p>
                {sections
                    .into_iter()
                    .map(|(collection, entries)| {
                        let page = page_href(&collection);
                        let is_api = collection == API;
                        view! {
                            <section class="home-section">
                                <h2>{listing_title(&collection)}</h2>
                                <div class="entry-list">
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            // API entries get their own page; listing
                                            // entries anchor into the collection page.
                                            let href = if is_api {
                                                page_href(&entry.key)
                                            } else {
                                                format!("{page}#{}", entry.key)
                                            };
                                            view! {
                                                <div class="entry-row">
                                                    <a href=href>{entry.title.clone()}</a>
                                                    <span class="entry-summary">
                                                        {summary_line(&entry.description)}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </article>
        </PageShell>
    }
}

/// Not-found page, rendered with the same shell so navigation still works.
#[component]
pub fn NotFoundPage(registry: Registry, path: String) -> impl IntoView {
    let title = format!("Not Found - {SITE_NAME}");

    view! {
        <PageShell title=title registry=registry current_key=String::new()>
            <div class="not-found">
                <h1>"Page Not Found"</h1>
                <p>"The page " <code>{path}</code> " could not be found."</p>
                <p>"It may have been renamed or removed."</p>
            </div>
        </PageShell>
    }
}

/// First line of a description, truncated for table display.
fn summary_line(description: &str) -> String {
    let first = description.lines().next().unwrap_or_default();
    if first.chars().count() > 80 {
        let truncated: String = first.chars().take(80).collect();
        format!("{truncated}...")
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookform_content::SampleStore;

    fn fixture() -> Registry {
        let mut store = SampleStore::new();
        store.add(
            CodeSample::new("clearError", "const cleared = clearErrors();")
                .with_sandbox("https://codesandbox.io/s/example-887rh"),
        );

        let mut registry = Registry::new(store);
        registry.add(
            API,
            ContentEntry::new("clearErrors", "clearErrors", "Clear form errors")
                .with_signature("(name?: string | string[]) => void")
                .with_sample("clearError"),
        );
        registry
    }

    #[test]
    fn entry_page_shows_heading_description_and_code() {
        let registry = fixture();
        let entry = registry.get("clearErrors").unwrap();
        let html = render_entry_page(&registry, entry);

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("clearErrors"));
        assert!(html.contains("Clear form errors"));
        assert!(html.contains("const cleared = clearErrors();"));
        assert!(html.contains("https://codesandbox.io/s/example-887rh"));
        // No typed variant was registered, so no typed block is rendered.
        assert!(!html.contains("language-typescript"));
    }

    #[test]
    fn entry_page_omits_absent_sections() {
        let mut registry = Registry::new(SampleStore::new());
        registry.add(API, ContentEntry::new("watch", "watch", "Watch input changes"));

        let entry = registry.get("watch").unwrap().clone();
        let html = render_entry_page(&registry, &entry);

        assert!(html.contains("watch"));
        assert!(!html.contains("class=\"signature\""));
        assert!(!html.contains("class=\"code-area\""));
        assert!(!html.contains("class=\"external-links\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let registry = fixture();
        let entry = registry.get("clearErrors").unwrap();
        let first = render_entry_page(&registry, entry);
        let second = render_entry_page(&registry, entry);
        assert_eq!(first, second);
    }

    #[test]
    fn typed_variant_renders_second_block() {
        let mut store = SampleStore::new();
        store.add(
            CodeSample::new("register", "js body")
                .with_typed("ts body")
                .with_sandbox("https://codesandbox.io/s/js")
                .with_typed_sandbox("https://codesandbox.io/s/ts"),
        );
        let mut registry = Registry::new(store);
        registry.add(
            API,
            ContentEntry::new("register", "register", "Register a field").with_sample("register"),
        );

        let entry = registry.get("register").unwrap().clone();
        let html = render_entry_page(&registry, &entry);

        assert!(html.contains("js body"));
        assert!(html.contains("ts body"));
        assert!(html.contains("language-javascript"));
        assert!(html.contains("language-typescript"));
        assert!(html.contains("https://codesandbox.io/s/ts"));
    }

    #[test]
    fn listing_page_preserves_order_and_anchors() {
        let mut registry = Registry::new(SampleStore::new());
        registry.add(FAQ, ContentEntry::new("faq-a", "First question", "answer one"));
        registry.add(FAQ, ContentEntry::new("faq-b", "Second question", "answer two"));

        let html = render_listing_page(&registry, FAQ);
        let first = html.find("First question").unwrap();
        let second = html.find("Second question").unwrap();
        assert!(first < second);
        assert!(html.contains("id=\"faq-a\""));
        assert!(html.contains("id=\"faq-b\""));
    }

    #[test]
    fn listing_page_for_empty_collection_renders() {
        let registry = Registry::new(SampleStore::new());
        let html = render_listing_page(&registry, FAQ);
        assert!(html.contains("FAQs"));
        assert!(!html.contains("class=\"listing-section\""));
    }

    #[test]
    fn code_sample_text_is_escaped() {
        let mut store = SampleStore::new();
        store.add(CodeSample::new("jsx", r#"<input {...register("firstName")} />"#));
        let mut registry = Registry::new(store);
        registry.add(
            API,
            ContentEntry::new("register", "register", "Register a field").with_sample("jsx"),
        );

        let entry = registry.get("register").unwrap().clone();
        let html = render_entry_page(&registry, &entry);
        assert!(html.contains("&lt;input"));
    }

    #[test]
    fn not_found_page_names_the_path() {
        let registry = fixture();
        let html = render_not_found_page(&registry, "missing.html");
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("missing.html"));
    }

    #[test]
    fn home_page_links_collections() {
        let registry = fixture();
        let html = render_home_page(&registry);
        assert!(html.contains("API Reference"));
        assert!(html.contains("clearErrors.html"));
    }
}
