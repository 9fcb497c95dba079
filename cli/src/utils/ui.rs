use colored::*;

// Text formatting helpers for messages on stderr. Stdout only ever carries
// the generated chart.
pub fn success(text: &str) -> String {
    format!("✓ {}", text.green())
}

pub fn error(text: &str) -> String {
    format!("✗ {}", text.red().bold())
}

pub fn info(text: &str) -> String {
    format!("ℹ {}", text.cyan())
}
