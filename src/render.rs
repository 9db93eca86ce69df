// 🖼️ Rendering - CategoryGroups → navigation + sections
//
// The core never touches a browser. A renderer turns groups into two
// fragments (navigation strip, content sections) and `render_page` drops
// them into the page template together with the scroll/click script.

use std::fmt::Write;

use crate::config::MenuConfig;
use crate::menu::CategoryGroup;
use crate::navigation::anchor_id;
use crate::source::LoadedMenu;

const PAGE_TEMPLATE: &str = include_str!("../web/menu.html");
const PAGE_STYLES: &str = include_str!("../web/menu.css");

// ============================================================================
// RENDERER TRAIT
// ============================================================================

/// MenuRenderer - minimal rendering interface
///
/// One nav entry and one section per group, both in group order.
pub trait MenuRenderer {
    fn render_nav(&self, groups: &[CategoryGroup]) -> String;
    fn render_sections(&self, groups: &[CategoryGroup]) -> String;
}

// ============================================================================
// HTML
// ============================================================================

pub struct HtmlRenderer;

impl MenuRenderer for HtmlRenderer {
    fn render_nav(&self, groups: &[CategoryGroup]) -> String {
        groups
            .iter()
            .map(|g| {
                format!(
                    r##"<a href="#{}" class="cat-link">{}</a>"##,
                    anchor_id(&g.category),
                    escape_html(&g.category)
                )
            })
            .collect()
    }

    fn render_sections(&self, groups: &[CategoryGroup]) -> String {
        let mut out = String::new();

        for group in groups {
            let _ = write!(
                out,
                r#"<section id="{}" class="menu-section"><h2 class="category-title">{}</h2><div class="menu-items-grid">"#,
                anchor_id(&group.category),
                escape_html(&group.category)
            );
            for item in &group.items {
                let _ = write!(
                    out,
                    concat!(
                        r#"<div class="menu-item"><div class="item-content"><div class="item-header">"#,
                        r#"<span class="item-title">{}</span><span class="item-price">{}</span></div>"#,
                        r#"<p class="item-desc">{}</p></div></div>"#
                    ),
                    escape_html(&item.name),
                    escape_html(&item.price),
                    escape_html(&item.description)
                );
            }
            out.push_str("</div></section>\n");
        }

        out
    }
}

/// Escape text for element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// PLAIN TEXT
// ============================================================================

/// Terminal-friendly listing used by `menu-sheet list`
pub struct TextRenderer;

impl MenuRenderer for TextRenderer {
    fn render_nav(&self, groups: &[CategoryGroup]) -> String {
        let labels: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        format!("{}\n", labels.join(" | "))
    }

    fn render_sections(&self, groups: &[CategoryGroup]) -> String {
        let mut out = String::new();

        for group in groups {
            let _ = writeln!(out, "\n== {} ==", group.category);
            for item in &group.items {
                let _ = writeln!(out, "  {:<48} {}", item.name, item.price);
                if item.has_description() {
                    let _ = writeln!(out, "      {}", item.description);
                }
            }
        }

        out
    }
}

// ============================================================================
// PAGE
// ============================================================================

/// Render a complete HTML page for one loaded menu.
///
/// Output depends only on the menu and config, so re-rendering the same
/// menu replaces the previous page byte for byte.
pub fn render_page(menu: &LoadedMenu, config: &MenuConfig) -> String {
    let renderer = HtmlRenderer;
    let nav = renderer.render_nav(&menu.groups);
    let sections = renderer.render_sections(&menu.groups);
    let title = escape_html(&config.title);
    let spy_threshold = config.spy_threshold.to_string();
    let header_offset = config.header_offset.to_string();

    fill_template(PAGE_TEMPLATE, |key| match key {
        "title" => Some(title.as_str()),
        "styles" => Some(PAGE_STYLES),
        "nav" => Some(nav.as_str()),
        "sections" => Some(sections.as_str()),
        "spy_threshold" => Some(spy_threshold.as_str()),
        "header_offset" => Some(header_offset.as_str()),
        "fallback" => Some(if menu.is_fallback { "true" } else { "false" }),
        _ => None,
    })
}

/// Single-pass `{{key}}` substitution. Inserted values are never rescanned,
/// unknown keys are left as they are.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key.trim()) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}
