use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{script, theme::Theme};
use crate::context::ApiRestSiteCtx;

const STYLE: &str = r#"
:root { --bg: #fafaf9; --fg: #1c1917; --muted: #78716c; --card: #ffffff; --accent: #0f766e; --border: #e7e5e4; }
[data-theme="dark"] { --bg: #0c0a09; --fg: #f5f5f4; --muted: #a8a29e; --card: #1c1917; --accent: #2dd4bf; --border: #292524; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); line-height: 1.6; }
a { color: var(--accent); }
header, main, footer { max-width: 64rem; margin: 0 auto; padding: 1rem 1.5rem; }
nav { display: flex; gap: 1.25rem; align-items: center; }
nav .brand { font-weight: 700; margin-right: auto; text-decoration: none; color: var(--fg); }
section { margin: 3rem 0; }
.grid { display: grid; gap: 1.25rem; grid-template-columns: repeat(auto-fill, minmax(17rem, 1fr)); }
.card { background: var(--card); border: 1px solid var(--border); border-radius: .75rem; padding: 1.25rem; }
.card img { width: 100%; border-radius: .5rem; }
.tags { display: flex; flex-wrap: wrap; gap: .4rem; padding: 0; list-style: none; }
.tags li { font-size: .8rem; border: 1px solid var(--border); border-radius: 999px; padding: 0 .6rem; color: var(--muted); }
.muted { color: var(--muted); }
.bar { height: .4rem; background: var(--border); border-radius: 999px; }
.bar span { display: block; height: 100%; background: var(--accent); border-radius: 999px; }
form.filter { display: flex; flex-wrap: wrap; gap: .75rem; margin-bottom: 1.25rem; }
form.filter input, form.filter select { padding: .4rem .6rem; border: 1px solid var(--border); border-radius: .5rem; background: var(--card); color: var(--fg); }
"#;

pub struct PageMeta<'a> {
    title: Option<&'a str>,
    description: &'a str,
    path: &'a str,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: Option<&'a str>, description: &'a str, path: &'a str) -> Self {
        Self {
            title,
            description,
            path,
        }
    }
}

pub fn layout(site: &ApiRestSiteCtx, theme: &Theme, meta: &PageMeta, content: Markup) -> Markup {
    let title = match meta.title {
        Some(title) => format!("{title} | {}", site.title()),
        None => site.title().to_owned(),
    };
    let canonical = format!("{}{}", site.base_url(), meta.path);

    html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_ref()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(meta.description);
                meta name="author" content=(site.author());
                link rel="canonical" href=(canonical);
                meta property="og:title" content=(title);
                meta property="og:description" content=(meta.description);
                meta property="og:url" content=(canonical);
                meta property="og:type" content="website";
                style { (PreEscaped(STYLE)) }
            }
            body id="top" {
                header {
                    nav {
                        a.brand href="/" { (site.author()) }
                        a href="/#projects" { "Projects" }
                        a href="/blog" { "Blog" }
                        a href={ "/theme/" (theme.toggled().as_ref()) } aria-label="Toggle theme" {
                            @match theme {
                                Theme::Light => { "🌙" }
                                Theme::Dark => { "☀️" }
                            }
                        }
                    }
                }
                main { (content) }
                footer {
                    p.muted {
                        "© " (site.author()) " · "
                        a href="/sitemap.xml" { "Sitemap" }
                        " · "
                        a href="#top" { "Back to top" }
                    }
                }
                (script::web_vitals())
            }
        }
    }
}
