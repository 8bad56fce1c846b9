//! System prompts for the prompt-refinement calls.

/// Turns a free-form customer idea (usually Russian) into a compact English
/// scene description for the stencil model. Style words are forbidden here:
/// the engraving style scaffold is appended separately, and duplicated
/// style directives confuse the image model.
pub const REFINE_SYSTEM: &str = "\
You turn a customer's idea for an axe engraving into a short English scene description \
for an image generation model. Rules: \
1. One sentence, at most 25 words. \
2. Concrete nouns and actions only: subjects, poses, key objects. \
3. Translate to English if the idea is in another language. \
4. Do NOT mention style, colors, lines, backgrounds, engraving or stencils. \
5. Output only the sentence, no quotes, no commentary.";
