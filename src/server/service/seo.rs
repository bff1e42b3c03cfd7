//! Server-rendered SEO endpoints: robots.txt and sitemap.xml.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        case::CaseRepository, page::PageRepository, product::ProductRepository,
        service::ServiceRepository, settings::SettingsRepository,
    },
    error::AppError,
};

/// One `<url>` entry of the sitemap.
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

pub struct SeoService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> SeoService<'a> {
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Renders robots.txt: the stored override when present, otherwise a
    /// generated default based on the indexing flag.
    pub async fn robots_txt(&self) -> Result<String, AppError> {
        let settings = SettingsRepository::new(self.db).get_or_create_seo().await?;

        if let Some(custom) = settings.robots_txt.filter(|v| !v.trim().is_empty()) {
            return Ok(custom);
        }

        Ok(default_robots_txt(settings.allow_indexing, self.app_url))
    }

    /// Renders the sitemap: static routes plus every active product,
    /// service, case and page.
    ///
    /// A failing entity-group query is logged and that group omitted; the
    /// sitemap itself always renders.
    pub async fn sitemap_xml(&self) -> Result<String, AppError> {
        let today = chrono::Utc::now().date_naive();
        let mut urls = vec![
            self.entry("/", Some(today), "daily", "1.0"),
            self.entry("/products", Some(today), "weekly", "0.9"),
            self.entry("/services", Some(today), "weekly", "0.9"),
            self.entry("/cases", Some(today), "weekly", "0.8"),
            self.entry("/about", Some(today), "monthly", "0.7"),
            self.entry("/contacts", Some(today), "monthly", "0.7"),
        ];

        match ProductRepository::new(self.db).get_active().await {
            Ok(products) => {
                for product in products {
                    urls.push(self.entry(
                        &format!("/products/{}", product.slug),
                        Some(product.updated_at.date_naive()),
                        "weekly",
                        "0.8",
                    ));
                }
            }
            Err(e) => tracing::warn!("Sitemap: skipping products group: {}", e),
        }

        match ServiceRepository::new(self.db).get_active().await {
            Ok(services) => {
                for service in services {
                    urls.push(self.entry(
                        &format!("/services/{}", service.slug),
                        Some(service.updated_at.date_naive()),
                        "weekly",
                        "0.8",
                    ));
                }
            }
            Err(e) => tracing::warn!("Sitemap: skipping services group: {}", e),
        }

        match CaseRepository::new(self.db).get_active().await {
            Ok(cases) => {
                for case in cases {
                    urls.push(self.entry(
                        &format!("/cases/{}", case.slug),
                        Some(case.updated_at.date_naive()),
                        "monthly",
                        "0.7",
                    ));
                }
            }
            Err(e) => tracing::warn!("Sitemap: skipping cases group: {}", e),
        }

        match PageRepository::new(self.db).get_active().await {
            Ok(pages) => {
                for page in pages {
                    urls.push(self.entry(
                        &format!("/{}", page.slug),
                        Some(page.updated_at.date_naive()),
                        "monthly",
                        "0.6",
                    ));
                }
            }
            Err(e) => tracing::warn!("Sitemap: skipping pages group: {}", e),
        }

        Ok(render_sitemap(&urls))
    }

    fn entry(
        &self,
        path: &str,
        lastmod: Option<NaiveDate>,
        changefreq: &'static str,
        priority: &'static str,
    ) -> SitemapUrl {
        let base = self.app_url.trim_end_matches('/');

        SitemapUrl {
            loc: if path == "/" {
                format!("{}/", base)
            } else {
                format!("{}{}", base, path)
            },
            lastmod,
            changefreq,
            priority,
        }
    }
}

/// Default robots.txt: indexing either allowed (with admin and API paths
/// closed) or disallowed entirely, plus the sitemap link.
pub fn default_robots_txt(allow_indexing: bool, app_url: &str) -> String {
    let mut lines = vec!["User-agent: *".to_string()];

    if allow_indexing {
        lines.push("Disallow: /admin/".to_string());
        lines.push("Disallow: /api/".to_string());
        lines.push("Allow: /".to_string());
    } else {
        lines.push("Disallow: /".to_string());
    }

    lines.push(String::new());
    lines.push("# Sitemap".to_string());
    lines.push(format!(
        "Sitemap: {}/sitemap.xml",
        app_url.trim_end_matches('/')
    ));

    lines.join("\n")
}

/// Renders the `urlset` document.
pub fn render_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);

    for url in urls {
        xml.push_str("<url>");
        xml.push_str(&format!("<loc>{}</loc>", xml_escape(&url.loc)));
        if let Some(lastmod) = url.lastmod {
            xml.push_str(&format!("<lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d")));
        }
        xml.push_str(&format!("<changefreq>{}</changefreq>", url.changefreq));
        xml.push_str(&format!("<priority>{}</priority>", url.priority));
        xml.push_str("</url>");
    }

    xml.push_str("</urlset>");
    xml
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
