//! `robots.txt` and `sitemap.xml`.

use chrono::NaiveDate;

use crate::models::config::BrandConfig;

struct SitemapEntry {
    path: &'static str,
    change_frequency: &'static str,
    priority: &'static str,
}

const SITEMAP: &[SitemapEntry] = &[
    SitemapEntry { path: "/", change_frequency: "daily", priority: "1.0" },
    SitemapEntry { path: "/about", change_frequency: "monthly", priority: "0.8" },
    SitemapEntry { path: "/services", change_frequency: "weekly", priority: "0.9" },
    SitemapEntry { path: "/our-work", change_frequency: "weekly", priority: "0.8" },
    SitemapEntry { path: "/case-studies", change_frequency: "weekly", priority: "0.8" },
    SitemapEntry { path: "/our-journey", change_frequency: "monthly", priority: "0.7" },
    SitemapEntry { path: "/blog", change_frequency: "daily", priority: "0.8" },
    SitemapEntry { path: "/contact", change_frequency: "monthly", priority: "0.7" },
];

pub fn robots_txt(brand: &BrandConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        brand.base_url()
    )
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn sitemap_xml(brand: &BrandConfig, last_modified: NaiveDate) -> String {
    let base = brand.base_url();
    let lastmod = last_modified.format("%Y-%m-%d");
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in SITEMAP {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            xml_escape(&format!("{base}{}", entry.path)),
            entry.change_frequency,
            entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chrome::tests::brand;

    #[test]
    fn robots_blocks_admin_and_points_at_sitemap() {
        let mut brand = brand();
        brand.site_url = "https://acme.example/".into();
        let robots = robots_txt(&brand);
        assert!(robots.contains("Disallow: /admin/\n"));
        assert!(robots.contains("Disallow: /api/\n"));
        assert!(robots.ends_with("Sitemap: https://acme.example/sitemap.xml\n"));
    }

    #[test]
    fn sitemap_lists_public_pages() {
        let mut brand = brand();
        brand.site_url = "https://acme.example".into();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let xml = sitemap_xml(&brand, date);
        assert_eq!(xml.matches("<url>").count(), 8);
        assert!(xml.contains("<loc>https://acme.example/</loc>"));
        assert!(xml.contains(
            "<loc>https://acme.example/services</loc>\n    <lastmod>2024-05-01</lastmod>\n    \
             <changefreq>weekly</changefreq>\n    <priority>0.9</priority>"
        ));
        assert!(!xml.contains("/admin"));
    }

    #[test]
    fn sitemap_escapes_base_url() {
        let mut brand = brand();
        brand.site_url = "https://acme.example/?a=1&b=<2>".into();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let xml = sitemap_xml(&brand, date);
        assert!(xml.contains("<loc>https://acme.example/?a=1&amp;b=&lt;2&gt;/blog</loc>"));
        assert!(!xml.contains("&b="));
    }
}
