// Prompts for one-shot thesis derivation at session creation.

pub const THESIS_SYSTEM: &str = "You distill writing outlines into a single \
    concrete argument. \
    Return EXACTLY one sentence — the thesis the finished piece should prove. \
    Reference concrete tools, numbers, or metrics from the outline when present. \
    No preamble, no quotes, no explanation.";

const THESIS_TEMPLATE: &str = "Outline: {outline}\nStyle: {style}\nTone: {tone}\n\n\
    State the one-sentence core argument of this piece.";

pub fn render_thesis_prompt(outline: &str, style: &str, tone: &str) -> String {
    THESIS_TEMPLATE
        .replace("{outline}", outline)
        .replace("{style}", style)
        .replace("{tone}", tone)
}
