//! Prompt templates for the engraving sketch models.

/// Style scaffold wrapped around every customer idea. The stencil is cut on
/// a vinyl plotter, so anything that is not solid black on white is scrap.
pub const ENGRAVING_STYLE: &str = "Professional black and white vector stencil for axe blade engraving. \
Style: clean graphics, bold and clear closed contours, optimized for vinyl plotter cutting. \
ABSOLUTELY FORBIDDEN: shadows, gradients, gray spots, halftones or thin broken lines. \
Only absolutely black color on a pure white background.";

/// Negative prompt for models that accept one.
pub const NEGATIVE_PROMPT: &str = "color, gray, shading, gradient, blurry, realistic, photo, 3d, \
complex background, text, watermark";

/// Builds the full model prompt from the customer's subject line.
pub fn compose_sketch_prompt(subject: &str) -> String {
    format!("{ENGRAVING_STYLE} Subject: {}.", subject.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_wraps_subject_in_style_scaffold() {
        let prompt = compose_sketch_prompt("рыбак ловит щуку");
        assert!(prompt.starts_with("Professional black and white"));
        assert!(prompt.contains("Subject: рыбак ловит щуку."));
    }

    #[test]
    fn test_compose_trims_subject_whitespace() {
        let prompt = compose_sketch_prompt("  волк воет на луну \n");
        assert!(prompt.contains("Subject: волк воет на луну."));
    }
}
