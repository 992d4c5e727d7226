use crate::rules::table::{rule_table, TranslationRule};

/// Applies the fixed rule table to documentation blocks, line by line.
///
/// The table is compiled once at construction and never mutated, so
/// [`RuleEngine::translate_block`] is a pure function of its input.
pub struct RuleEngine {
    rules: Vec<TranslationRule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            rules: rule_table(),
        }
    }

    /// Translate one documentation block.
    ///
    /// Lines are classified by a leading-asterisk prefix test: a line
    /// matching `^\s*\*` is comment prose and is folded through every
    /// rule in declared order; any other line passes through verbatim.
    /// Each line keeps its own terminator, so CRLF files stay CRLF.
    pub fn translate_block(&self, block: &str) -> String {
        let lines: Vec<String> = block
            .split('\n')
            .map(|line| {
                let (body, carriage_return) = match line.strip_suffix('\r') {
                    Some(body) => (body, "\r"),
                    None => (line, ""),
                };

                if is_prose_line(body) {
                    format!("{}{}", self.translate_line(body), carriage_return)
                } else {
                    line.to_string()
                }
            })
            .collect();

        lines.join("\n")
    }

    /// Left-to-right fold over the rule table: every rule transforms the
    /// line's current text before the next rule runs.
    fn translate_line(&self, line: &str) -> String {
        self.rules
            .iter()
            .fold(line.to_string(), |acc, rule| rule.apply(acc))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Comment-prose lines start with optional whitespace and an asterisk.
fn is_prose_line(line: &str) -> bool {
    line.trim_start().starts_with('*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_line_classification() {
        assert!(is_prose_line(" * position x : weight"));
        assert!(is_prose_line("   * indented"));
        assert!(is_prose_line(" */"));
        assert!(!is_prose_line("/**"));
        assert!(!is_prose_line("'use strict';"));
        assert!(!is_prose_line(""));
    }

    #[test]
    fn test_translate_block_legend_line() {
        let engine = RuleEngine::new();
        let block = "/**\n * position x : left diagonal weight\n */";

        let translated = engine.translate_block(block);

        assert_eq!(translated, "/**\n * 位置 x : left diagonal 太さ\n */");
    }

    #[test]
    fn test_translate_block_keeps_structural_lines() {
        let engine = RuleEngine::new();
        let block = "/**\n * MOUSE\nposition x is not prose here\n */";

        let translated = engine.translate_block(block);

        assert!(translated.contains(" * マウス"));
        assert!(translated.contains("position x is not prose here"));
    }

    #[test]
    fn test_translate_block_full_header() {
        let engine = RuleEngine::new();
        let block = "/**\n\
                     \x20* draws a grid of rotating rectangles\n\
                     \x20*\n\
                     \x20* MOUSE\n\
                     \x20* position x          : rectangle size\n\
                     \x20* left click          : new random layout\n\
                     \x20*\n\
                     \x20* KEYS\n\
                     \x20* s                   : save png\n\
                     \x20*/";

        let translated = engine.translate_block(block);

        assert!(translated.contains(" * a グリッド of rotating 四角形を描画します。"));
        assert!(translated.contains(" * マウス"));
        assert!(translated.contains(" * 位置 x          : 四角形 サイズ"));
        assert!(translated.contains("左クリック"));
        assert!(translated.contains(" * キー"));
        assert!(translated.contains("PNG を保存"));
    }

    #[test]
    fn test_translate_block_preserves_crlf() {
        let engine = RuleEngine::new();
        let block = "/**\r\n * save png\r\n */";

        let translated = engine.translate_block(block);

        assert_eq!(translated, "/**\r\n * PNG を保存\r\n */");
    }

    #[test]
    fn test_translate_block_is_deterministic() {
        let engine = RuleEngine::new();
        let block = "/**\n * toggle grid, increase size\n */";

        assert_eq!(engine.translate_block(block), engine.translate_block(block));
    }

    #[test]
    fn test_translate_block_no_vocabulary_is_identity() {
        let engine = RuleEngine::new();
        let block = "/**\n * nothing here matches any vocabulary\n */";

        assert_eq!(engine.translate_block(block), block);
    }

    #[test]
    fn test_translated_output_is_stable_under_retranslation() {
        // Even without the script-detector gate, feeding the engine its
        // own output must not change it further: every replacement is a
        // fixed point of the rule that produced it.
        let engine = RuleEngine::new();
        let block = "/**\n * delete : clear\n * arrow up/down : size\n * shift : constrain\n */";

        let once = engine.translate_block(block);
        let twice = engine.translate_block(&once);

        assert_eq!(once, twice);
    }
}
