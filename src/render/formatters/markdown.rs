use crate::render::view_models::RenderOutcome;

/// Markdown formatter for search results
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an outcome as markdown
    pub fn format(outcome: &RenderOutcome) -> String {
        let mut md = String::with_capacity(1024);

        let cards = match outcome {
            RenderOutcome::Empty => {
                md.push_str("*검색 결과가 없습니다.*\n");
                return md;
            }
            RenderOutcome::Populated { count, cards } => {
                md.push_str(&format!("**총 {}건**\n\n", count));
                cards
            }
        };

        for card in cards {
            md.push_str(&format!("## {}\n\n", card.title));
            md.push_str(&format!("{} · {}\n\n", card.author, card.date));

            for block in &card.blocks {
                md.push_str(&format!("**{}**  \n{}\n\n", block.label, block.text));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view_models::{CardView, StructureBlockView};
    use smallvec::smallvec;

    #[test]
    fn test_format_markdown() {
        let outcome = RenderOutcome::Populated {
            count: 1,
            cards: vec![CardView {
                title: "Budget".to_string(),
                author: "Park".to_string(),
                date: "2024.06.01".to_string(),
                animation_delay_secs: 0.0,
                blocks: smallvec![
                    StructureBlockView {
                        key: "argument".to_string(),
                        label: "주장".to_string(),
                        css_class: "arg-label".to_string(),
                        text: "Cut spending".to_string(),
                    },
                    StructureBlockView {
                        key: "fact".to_string(),
                        label: "사실".to_string(),
                        css_class: "fact-label".to_string(),
                        text: "Deficit grew".to_string(),
                    },
                ],
            }],
        };

        let md = MarkdownFormatter::format(&outcome);

        assert!(md.starts_with("**총 1건**"));
        assert!(md.contains("## Budget\n"));
        assert!(md.contains("Park · 2024.06.01"));
        let arg = md.find("**주장**").unwrap();
        let fact = md.find("**사실**").unwrap();
        assert!(arg < fact, "blocks should keep stored order");
    }

    #[test]
    fn test_format_markdown_empty() {
        let md = MarkdownFormatter::format(&RenderOutcome::Empty);
        assert!(md.contains("검색 결과가 없습니다"));
        assert!(!md.contains("##"));
    }
}
