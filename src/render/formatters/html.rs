use crate::render::view_models::{CardView, RenderOutcome};

/// Message shown in the empty-state block
pub const NO_RESULTS_MESSAGE: &str = "검색 결과가 없습니다.";

/// HTML formatter for search results
///
/// Produces the result-status line and editorial cards (or the no-results
/// block) as an HTML fragment for the host page. All record text is escaped.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format an outcome as an HTML fragment
    pub fn format(outcome: &RenderOutcome) -> String {
        let mut html = String::with_capacity(2048);

        match outcome {
            RenderOutcome::Empty => {
                html.push_str(&format!(
                    "<div id=\"no-results\" class=\"no-results\">\n<p>{}</p>\n</div>\n",
                    NO_RESULTS_MESSAGE
                ));
            }
            RenderOutcome::Populated { count, cards } => {
                html.push_str(&format!(
                    "<div id=\"result-status\" class=\"result-status\">총 <span id=\"result-count\">{}</span>건</div>\n",
                    count
                ));
                html.push_str("<div id=\"editorial-list\" class=\"editorial-list\">\n");
                for card in cards {
                    Self::format_card(&mut html, card);
                }
                html.push_str("</div>\n");
            }
        }

        html
    }

    /// Format an outcome as a standalone page with embedded CSS
    pub fn format_page(outcome: &RenderOutcome) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<title>Editorial Search</title>\n");
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 960px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
        html.push_str(".editorial-list { display: grid; gap: 20px; }\n");
        html.push_str(".editorial-card { border: 1px solid #ecf0f1; border-radius: 8px; padding: 20px; animation: fadeIn 0.4s ease both; }\n");
        html.push_str(".card-title { margin: 0 0 8px; color: #2c3e50; }\n");
        html.push_str(".card-meta { color: #6c757d; display: flex; gap: 12px; }\n");
        html.push_str(".structure-item { margin-top: 12px; }\n");
        html.push_str(".structure-label { display: inline-block; padding: 2px 8px; border-radius: 4px; font-size: 0.85em; font-weight: 600; }\n");
        html.push_str(".bg-label { background: #e3f2fd; color: #1565c0; }\n");
        html.push_str(".ev-label { background: #e8f5e9; color: #2e7d32; }\n");
        html.push_str(".arg-label { background: #fff3e0; color: #e65100; }\n");
        html.push_str(".fact-label { background: #f3e5f5; color: #6a1b9a; }\n");
        html.push_str("@keyframes fadeIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: none; } }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&Self::format(outcome));

        html.push_str("</body>\n</html>\n");
        html
    }

    fn format_card(html: &mut String, card: &CardView) {
        html.push_str(&format!(
            "<div class=\"editorial-card\" style=\"animation-delay: {}\">\n",
            card.animation_delay_css()
        ));
        html.push_str("<div class=\"card-header\">\n");
        html.push_str(&format!("<h2 class=\"card-title\">{}</h2>\n", escape(&card.title)));
        html.push_str("<div class=\"card-meta\">\n");
        html.push_str(&format!("<span class=\"author\">{}</span>\n", escape(&card.author)));
        html.push_str(&format!("<span class=\"date\">{}</span>\n", escape(&card.date)));
        html.push_str("</div>\n</div>\n");

        html.push_str("<div class=\"card-content\">\n");
        for block in &card.blocks {
            html.push_str("<div class=\"structure-item\">\n");
            html.push_str(&format!(
                "<span class=\"structure-label {}\">{}</span>\n",
                block.css_class,
                escape(&block.label)
            ));
            html.push_str(&format!("<p class=\"structure-text\">{}</p>\n", escape(&block.text)));
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n</div>\n");
    }
}

/// Escape text for HTML element content and attribute values
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view_models::{stagger_delay, StructureBlockView};
    use smallvec::smallvec;

    fn sample_outcome() -> RenderOutcome {
        let cards = vec![
            CardView {
                title: "금리 인상의 여파".to_string(),
                author: "Kim".to_string(),
                date: "2024.05.01".to_string(),
                animation_delay_secs: stagger_delay(0),
                blocks: smallvec![StructureBlockView {
                    key: "background".to_string(),
                    label: "배경".to_string(),
                    css_class: "bg-label".to_string(),
                    text: "물가 상승".to_string(),
                }],
            },
            CardView {
                title: "<b>A & B</b>".to_string(),
                author: "Lee".to_string(),
                date: "2024.05.02".to_string(),
                animation_delay_secs: stagger_delay(1),
                blocks: smallvec![StructureBlockView {
                    key: "rebuttal".to_string(),
                    label: "rebuttal".to_string(),
                    css_class: "bg-label".to_string(),
                    text: "\"quoted\"".to_string(),
                }],
            },
        ];
        RenderOutcome::Populated { count: 2, cards }
    }

    #[test]
    fn test_format_populated() {
        let html = HtmlFormatter::format(&sample_outcome());

        assert!(html.contains("<span id=\"result-count\">2</span>"));
        assert_eq!(html.matches("class=\"editorial-card\"").count(), 2);
        assert!(html.contains("animation-delay: 0s"));
        assert!(html.contains("animation-delay: 0.1s"));
        assert!(html.contains("<span class=\"structure-label bg-label\">배경</span>"));
        assert!(html.contains("<p class=\"structure-text\">물가 상승</p>"));
        assert!(!html.contains("no-results"));
    }

    #[test]
    fn test_format_escapes_record_text() {
        let html = HtmlFormatter::format(&sample_outcome());

        assert!(html.contains("&lt;b&gt;A &amp; B&lt;/b&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(!html.contains("<b>A"));
    }

    #[test]
    fn test_format_empty() {
        let html = HtmlFormatter::format(&RenderOutcome::Empty);

        assert!(html.contains("id=\"no-results\""));
        assert!(html.contains(NO_RESULTS_MESSAGE));
        assert!(!html.contains("editorial-list"));
        assert!(!html.contains("result-count"));
    }

    #[test]
    fn test_format_page_wraps_fragment() {
        let page = HtmlFormatter::format_page(&sample_outcome());

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(".ev-label"));
        assert!(page.contains("editorial-list"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
