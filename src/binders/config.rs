//! Configuration card

use crate::binders::{require_regions, write_text, BindError};
use crate::models::Configuration;
use crate::surface::{regions, Surface};

pub const NAME: &str = "configuration";

const REGIONS: [&str; 3] = [
    regions::CONFIG_INTERVALO,
    regions::CONFIG_RANGO,
    regions::CONFIG_UMBRAL,
];

pub fn render<S: Surface + ?Sized>(surface: &mut S, config: &Configuration) -> Result<(), BindError> {
    require_regions(surface, NAME, &REGIONS)?;

    write_text(surface, regions::CONFIG_INTERVALO, &config.sample_interval_seconds.to_string());
    write_text(surface, regions::CONFIG_RANGO, &config.display_window_hours.to_string());
    write_text(surface, regions::CONFIG_UMBRAL, &config.critical_threshold.to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Document, Element};

    #[test]
    fn writes_plain_integers() {
        let mut doc = Document::dashboard("Monitor");
        let config = Configuration {
            sample_interval_seconds: 60,
            display_window_hours: 24,
            critical_threshold: 100,
        };

        render(&mut doc, &config).unwrap();

        let text = |id: &str| doc.region(id).map(|r| r.text());
        assert_eq!(text(regions::CONFIG_INTERVALO).as_deref(), Some("60"));
        assert_eq!(text(regions::CONFIG_RANGO).as_deref(), Some("24"));
        assert_eq!(text(regions::CONFIG_UMBRAL).as_deref(), Some("100"));
    }

    #[test]
    fn second_render_replaces_first() {
        let mut doc = Document::dashboard("Monitor");
        let first = Configuration {
            sample_interval_seconds: 60,
            display_window_hours: 24,
            critical_threshold: 100,
        };
        let second = Configuration {
            sample_interval_seconds: 30,
            display_window_hours: 12,
            critical_threshold: 150,
        };

        render(&mut doc, &first).unwrap();
        render(&mut doc, &second).unwrap();

        for (id, expected) in [
            (regions::CONFIG_INTERVALO, "30"),
            (regions::CONFIG_RANGO, "12"),
            (regions::CONFIG_UMBRAL, "150"),
        ] {
            let region = doc.region(id).unwrap();
            assert_eq!(region.children().len(), 1, "region {}", id);
            assert_eq!(region.text(), expected);
        }
    }

    #[test]
    fn missing_threshold_region_aborts() {
        let mut doc = Document::from_root(
            Element::new("div")
                .with_child(Element::new("span").with_id(regions::CONFIG_INTERVALO))
                .with_child(Element::new("span").with_id(regions::CONFIG_RANGO)),
        );
        let config = Configuration {
            sample_interval_seconds: 60,
            display_window_hours: 24,
            critical_threshold: 100,
        };

        let err = render(&mut doc, &config).unwrap_err();

        assert_eq!(
            err,
            BindError::MissingRegion {
                binder: NAME,
                region: regions::CONFIG_UMBRAL,
            }
        );
        assert!(!doc.to_html().contains("60"));
        assert!(!doc.to_html().contains("24"));
    }
}
