mod engine;
mod table;

pub use engine::RuleEngine;
pub use table::{rule_table, TranslationRule};
