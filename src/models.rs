use std::fmt;

/// Air quality classification attached to a reading
///
/// Labels that do not match a known class are kept verbatim in `Other`
/// so they can still be displayed (and styled as the worst class).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityLabel {
    Good,
    Moderate,
    Poor,
    Other(String),
}

impl QualityLabel {
    /// Text shown on the dashboard for this label
    pub fn as_str(&self) -> &str {
        match self {
            QualityLabel::Good => "Buena",
            QualityLabel::Moderate => "Moderada",
            QualityLabel::Poor => "Deficiente",
            QualityLabel::Other(label) => label,
        }
    }
}

impl From<&str> for QualityLabel {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "buena" | "good" => QualityLabel::Good,
            "moderada" | "moderate" => QualityLabel::Moderate,
            "deficiente" | "poor" => QualityLabel::Poor,
            _ => QualityLabel::Other(label.to_string()),
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "Crítica",
            Severity::Warning => "Advertencia",
            Severity::Info => "Informativa",
            Severity::Other(level) => level,
        }
    }
}

impl From<&str> for Severity {
    fn from(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "crítica" | "critica" | "critical" => Severity::Critical,
            "advertencia" | "warning" => Severity::Warning,
            "informativa" | "info" => Severity::Info,
            _ => Severity::Other(level.to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub air_quality_index: u32,
    pub quality: QualityLabel,
}

impl Reading {
    pub fn new(
        timestamp: &str,
        temperature_c: f64,
        humidity_pct: f64,
        air_quality_index: u32,
        quality: &str,
    ) -> Self {
        Reading {
            timestamp: timestamp.to_string(),
            temperature_c,
            humidity_pct,
            air_quality_index,
            quality: QualityLabel::from(quality),
        }
    }
}

/// Monitoring settings shown in the configuration card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub sample_interval_seconds: u32,
    pub display_window_hours: u32,
    pub critical_threshold: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub timestamp: String,
    pub message: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(timestamp: &str, message: &str, severity: &str) -> Self {
        Alert {
            timestamp: timestamp.to_string(),
            message: message.to_string(),
            severity: Severity::from(severity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spanish_and_english_quality_labels() {
        assert_eq!(QualityLabel::from("Buena"), QualityLabel::Good);
        assert_eq!(QualityLabel::from("moderate"), QualityLabel::Moderate);
        assert_eq!(QualityLabel::from(" Deficiente "), QualityLabel::Poor);
    }

    #[test]
    fn keeps_unknown_labels_verbatim() {
        let label = QualityLabel::from("Peligrosa");
        assert_eq!(label, QualityLabel::Other("Peligrosa".to_string()));
        assert_eq!(label.to_string(), "Peligrosa");
    }

    #[test]
    fn severity_display_uses_dashboard_text() {
        assert_eq!(Severity::from("Crítica").to_string(), "Crítica");
        assert_eq!(Severity::from("warning").to_string(), "Advertencia");
        assert_eq!(Severity::from("Info"), Severity::Info);
        assert_eq!(Severity::from("Urgente"), Severity::Other("Urgente".to_string()));
    }
}
