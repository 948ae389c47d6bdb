// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::Strength;

// Truncate a string if it's too long, counting characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// Colour a strength label the way the menu shows it
pub fn styled_strength(strength: Strength) -> StyledObject<&'static str> {
    let label = style(strength.label());
    match strength {
        Strength::VeryWeak => label.red().bold(),
        Strength::Weak => label.yellow(),
        Strength::Medium => label.cyan(),
        Strength::Strong => label.green(),
        Strength::VeryStrong => label.blue().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_strings() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }

    #[test]
    fn styled_strength_keeps_label() {
        let styled = styled_strength(Strength::Medium).force_styling(false);
        assert_eq!(styled.to_string(), "Medium");
    }
}
