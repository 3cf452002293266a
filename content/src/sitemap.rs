use chrono::NaiveDate;
use maud::{html, PreEscaped};

use crate::catalog::Catalog;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    loc: String,
    lastmod: Option<NaiveDate>,
    priority: f32,
}

impl SitemapEntry {
    pub fn new(base_url: &str, path: &str, lastmod: Option<NaiveDate>, priority: f32) -> Self {
        Self {
            loc: join_url(base_url, path),
            lastmod,
            priority,
        }
    }

    pub fn loc(&self) -> &str {
        &self.loc
    }

    pub fn lastmod(&self) -> &Option<NaiveDate> {
        &self.lastmod
    }

    pub fn priority(&self) -> &f32 {
        &self.priority
    }
}

/// Site index first, then one entry per project, then the blog.
pub fn entries(base_url: &str, catalog: &Catalog) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry::new(base_url, "/", None, 1.0),
        SitemapEntry::new(base_url, "/blog", None, 0.7),
    ];

    entries.extend(catalog.projects().iter().map(|project| {
        SitemapEntry::new(
            base_url,
            &format!("/projects/{}", project.slug()),
            None,
            0.8,
        )
    }));

    entries.extend(catalog.blog_posts_newest_first().into_iter().map(|post| {
        SitemapEntry::new(
            base_url,
            &format!("/blog/{}", post.slug()),
            post.published_on(),
            0.6,
        )
    }));

    entries
}

pub fn render(entries: &[SitemapEntry]) -> String {
    let markup = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NAMESPACE) {
            @for entry in entries {
                url {
                    loc { (entry.loc) }
                    @if let Some(lastmod) = entry.lastmod {
                        lastmod { (lastmod.format("%Y-%m-%d").to_string()) }
                    }
                    priority { (format!("{:.1}", entry.priority)) }
                }
            }
        }
    };
    markup.into_string()
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_project() {
        let catalog = Catalog::seeded();
        let entries = entries("https://example.dev", &catalog);

        for project in catalog.projects() {
            let loc = format!("https://example.dev/projects/{}", project.slug());
            assert_eq!(entries.iter().filter(|e| e.loc() == loc).count(), 1);
        }
        assert_eq!(
            entries.len(),
            2 + catalog.projects().len() + catalog.blog_posts().len()
        );
    }

    #[test]
    fn project_entries_keep_input_order() {
        let catalog = Catalog::seeded();
        let projects = entries("https://example.dev", &catalog)
            .into_iter()
            .filter(|e| e.loc().contains("/projects/"))
            .map(|e| e.loc().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(
            projects,
            vec![
                "https://example.dev/projects/green-thumb",
                "https://example.dev/projects/vitaflow",
                "https://example.dev/projects/infinitepages",
            ]
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalised() {
        let entry = SitemapEntry::new("https://example.dev/", "/blog", None, 0.5);
        assert_eq!(entry.loc(), "https://example.dev/blog");

        let entry = SitemapEntry::new("https://example.dev//", "/", None, 0.5);
        assert_eq!(entry.loc(), "https://example.dev/");
    }

    #[test]
    fn blog_entries_carry_lastmod() {
        let catalog = Catalog::seeded();
        let entries = entries("https://example.dev", &catalog);
        let post = entries
            .iter()
            .find(|e| e.loc().ends_with("/blog/designing-offline-first-apps"))
            .unwrap();
        assert_eq!(post.lastmod(), &NaiveDate::from_ymd_opt(2024, 2, 18));
    }

    #[test]
    fn renders_urlset() {
        let xml = render(&[
            SitemapEntry::new(
                "https://example.dev",
                "/blog/a&b",
                NaiveDate::from_ymd_opt(2024, 6, 3),
                0.6,
            ),
            SitemapEntry::new("https://example.dev", "/", None, 1.0),
        ]);

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://example.dev/blog/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-06-03</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }
}
