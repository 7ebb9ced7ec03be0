//! Hard-coded sample data shown on the dashboard

use crate::dashboard::DashboardData;
use crate::models::{Alert, Configuration, Reading};

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        current: Reading::new("2025-12-26 08:15", 24.5, 55.0, 72, "Moderada"),
        configuration: Configuration {
            sample_interval_seconds: 60,
            display_window_hours: 24,
            critical_threshold: 100,
        },
        // Newest first
        alerts: vec![
            Alert::new(
                "2025-12-26 08:15",
                "IAQ elevado en Laboratorio 1",
                "Advertencia",
            ),
            Alert::new(
                "2025-12-25 16:40",
                "Calidad del aire crítica en Aula 203",
                "Crítica",
            ),
        ],
        readings: vec![
            Reading::new("2025-12-26 08:00", 23.9, 52.0, 65, "Buena"),
            Reading::new("2025-12-26 07:30", 23.5, 50.0, 60, "Buena"),
            Reading::new("2025-12-26 07:00", 24.2, 53.0, 70, "Moderada"),
            Reading::new("2025-12-26 06:30", 25.0, 58.0, 85, "Deficiente"),
        ],
    }
}
