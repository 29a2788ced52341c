use crate::render::view_models::RenderOutcome;

/// Plain-text formatter for terminal output
pub struct TextFormatter;

impl TextFormatter {
    pub fn format(outcome: &RenderOutcome) -> String {
        let mut out = String::with_capacity(1024);

        let (count, cards) = match outcome {
            RenderOutcome::Empty => {
                out.push_str("검색 결과가 없습니다.\n");
                return out;
            }
            RenderOutcome::Populated { count, cards } => (count, cards),
        };

        out.push_str(&format!("총 {}건\n", count));

        for (i, card) in cards.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("[{}] {}\n", i + 1, card.title));
            out.push_str(&format!("    {} | {}\n", card.author, card.date));
            for block in &card.blocks {
                out.push_str(&format!("    [{}] {}\n", block.label, block.text));
            }
        }

        out
    }
}
