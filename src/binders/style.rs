//! Mapping from quality labels and alert severities to badge style tokens

use crate::models::{QualityLabel, Severity};
use crate::surface::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Success,
    Warning,
    Danger,
    Secondary,
    DarkText,
}

impl StyleToken {
    /// Every token a badge may carry; cleared before a new style is applied
    pub const ALL: [StyleToken; 5] = [
        StyleToken::Secondary,
        StyleToken::Success,
        StyleToken::Warning,
        StyleToken::Danger,
        StyleToken::DarkText,
    ];

    /// CSS class used on the page
    pub const fn class(self) -> &'static str {
        match self {
            StyleToken::Success => "bg-success",
            StyleToken::Warning => "bg-warning",
            StyleToken::Danger => "bg-danger",
            StyleToken::Secondary => "bg-secondary",
            StyleToken::DarkText => "text-dark",
        }
    }
}

/// Good is green, Moderate is yellow with dark text, anything else is red
pub fn quality_style(label: &QualityLabel) -> &'static [StyleToken] {
    match label {
        QualityLabel::Good => &[StyleToken::Success],
        QualityLabel::Moderate => &[StyleToken::Warning, StyleToken::DarkText],
        QualityLabel::Poor | QualityLabel::Other(_) => &[StyleToken::Danger],
    }
}

/// Critical is red, Warning is yellow with dark text, anything else is neutral
pub fn severity_style(severity: &Severity) -> &'static [StyleToken] {
    match severity {
        Severity::Critical => &[StyleToken::Danger],
        Severity::Warning => &[StyleToken::Warning, StyleToken::DarkText],
        Severity::Info | Severity::Other(_) => &[StyleToken::Secondary],
    }
}

/// Replace whatever style tokens the element carries with `tokens`
pub fn apply_style(element: &mut Element, tokens: &[StyleToken]) {
    let all: Vec<&str> = StyleToken::ALL.iter().map(|t| t.class()).collect();
    element.remove_classes(&all);

    let wanted: Vec<&str> = tokens.iter().map(|t| t.class()).collect();
    element.add_classes(&wanted);
}
