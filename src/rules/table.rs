use regex::{Regex, RegexBuilder};

/// One ordered pattern -> replacement record.
///
/// The table order in [`rule_table`] is semantically significant: later
/// rules may re-match text produced by earlier rules, so no rule can be
/// reordered without changing output.
#[derive(Debug, Clone)]
pub struct TranslationRule {
    pattern: Regex,
    replacement: &'static str,
}

impl TranslationRule {
    /// Case-insensitive vocabulary rule.
    fn vocab(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .unwrap(),
            replacement,
        }
    }

    /// Case-sensitive rule: section-header literals and the leading-bullet
    /// verb rewrites.
    fn exact(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Apply this rule to a line, replacing every match. The replacement
    /// may reference capture groups (`${1}`).
    pub fn apply(&self, line: String) -> String {
        if self.pattern.is_match(&line) {
            self.pattern.replace_all(&line, self.replacement).into_owned()
        } else {
            line
        }
    }

    /// The source pattern, for diagnostics.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// The fixed translation rule table, in application order.
///
/// Multi-word phrases come before the single words they contain
/// (`position x` before `position`, `left click` before any bare key
/// word) so a phrase is always substituted whole. The leading-bullet
/// verb rules run last, over a line whose nouns are already translated.
pub fn rule_table() -> Vec<TranslationRule> {
    vec![
        // Section headers
        TranslationRule::exact(r"\bMOUSE\b", "マウス"),
        TranslationRule::exact(r"\bKEYS\b", "キー"),
        // Legend phrases
        TranslationRule::vocab(r"position x/y", "位置 x/y"),
        TranslationRule::vocab(r"position x", "位置 x"),
        TranslationRule::vocab(r"position y", "位置 y"),
        TranslationRule::vocab(r"left click", "左クリック"),
        TranslationRule::vocab(r"right click", "右クリック"),
        TranslationRule::vocab(r"middle click", "ミドルクリック"),
        TranslationRule::vocab(r"double click", "ダブルクリック"),
        TranslationRule::vocab(r"drag( the)? mouse", "マウスドラッグ"),
        TranslationRule::vocab(r"move( the)? mouse", "マウス移動"),
        // Save actions
        TranslationRule::vocab(r"save png", "PNG を保存"),
        TranslationRule::vocab(r"save jpg|save jpeg", "JPG を保存"),
        TranslationRule::vocab(r"save pdf", "PDF を保存"),
        TranslationRule::vocab(r"save svg", "SVG を保存"),
        TranslationRule::vocab(r"save gif", "GIF を保存"),
        TranslationRule::vocab(r"save (color )?palette", "カラーパレットを保存"),
        // Arrows and keys
        TranslationRule::vocab(r"arrow up/down", "↑/↓"),
        TranslationRule::vocab(r"arrow left/right", "←/→"),
        TranslationRule::vocab(r"space( bar)?", "スペース"),
        TranslationRule::vocab(r"backspace", "Backspace"),
        TranslationRule::vocab(r"delete", "Delete"),
        TranslationRule::vocab(r"shift", "Shift"),
        TranslationRule::vocab(r"ctrl", "Ctrl"),
        TranslationRule::vocab(r"cmd", "Cmd"),
        TranslationRule::vocab(r"alt", "Alt"),
        TranslationRule::vocab(r"opt(ion)?", "Option"),
        // Entities
        TranslationRule::vocab(r"circles?", "円"),
        TranslationRule::vocab(r"rectangles?", "四角形"),
        TranslationRule::vocab(r"lines?", "線"),
        TranslationRule::vocab(r"modules?", "モジュール"),
        TranslationRule::vocab(r"grid", "グリッド"),
        TranslationRule::vocab(r"row and colou?m count", "行数と列数"),
        // Attributes
        TranslationRule::vocab(r"size", "サイズ"),
        TranslationRule::vocab(r"color", "色"),
        TranslationRule::vocab(r"opacity", "不透明度"),
        TranslationRule::vocab(r"alpha", "アルファ"),
        TranslationRule::vocab(r"stroke", "線"),
        TranslationRule::vocab(r"fill", "塗り"),
        TranslationRule::vocab(r"background", "背景"),
        TranslationRule::vocab(r"foreground", "前景"),
        TranslationRule::vocab(r"offset", "オフセット"),
        TranslationRule::vocab(r"position", "位置"),
        TranslationRule::vocab(r"rotation", "回転"),
        TranslationRule::vocab(r"angle", "角度"),
        TranslationRule::vocab(r"thickness|weight", "太さ"),
        TranslationRule::vocab(r"scale", "スケール"),
        TranslationRule::vocab(r"density", "密度"),
        TranslationRule::vocab(r"speed", "速度"),
        // Actions
        TranslationRule::vocab(r"random position", "ランダム位置"),
        TranslationRule::vocab(r"toggle", "切り替え"),
        TranslationRule::vocab(r"increase", "増やす"),
        TranslationRule::vocab(r"decrease", "減らす"),
        TranslationRule::vocab(r"reset", "リセット"),
        // Leading description verbs, moved clause-final
        TranslationRule::exact(r"^\s*\*\s*changing\s+(.+)", " * ${1}を変化させます。"),
        TranslationRule::exact(r"^\s*\*\s*change\s+(.+)", " * ${1}を変化させます。"),
        TranslationRule::exact(r"^\s*\*\s*generates?\s+(.+)", " * ${1}を生成します。"),
        TranslationRule::exact(r"^\s*\*\s*draws?\s+(.+)", " * ${1}を描画します。"),
        TranslationRule::exact(r"^\s*\*\s*creates?\s+(.+)", " * ${1}を作成します。"),
        TranslationRule::exact(r"^\s*\*\s*makes?\s+(.+)", " * ${1}を作ります。"),
    ]
}
