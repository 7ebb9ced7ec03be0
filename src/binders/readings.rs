//! Readings history table

use crate::binders::{require_region, BindError};
use crate::models::Reading;
use crate::surface::{regions, Element, Surface};
use crate::utils::{format_humidity, format_temperature};

pub const NAME: &str = "readings table";

pub const NO_READINGS_TEXT: &str = "No hay mediciones registradas.";
pub const COLUMN_COUNT: usize = 5;

/// Replace the table body with one row per reading, in input order
pub fn render<S: Surface + ?Sized>(surface: &mut S, readings: &[Reading]) -> Result<(), BindError> {
    let tbody = require_region(surface, NAME, regions::TABLA_MEDICIONES)?;
    tbody.clear_children();

    if readings.is_empty() {
        let cell = Element::new("td")
            .with_attr("colspan", &COLUMN_COUNT.to_string())
            .with_text(NO_READINGS_TEXT);
        tbody.append_child(Element::new("tr").with_child(cell));
        return Ok(());
    }

    for reading in readings {
        tbody.append_child(reading_row(reading));
    }

    Ok(())
}

fn reading_row(reading: &Reading) -> Element {
    let cells = [
        reading.timestamp.clone(),
        format_temperature(reading.temperature_c),
        format_humidity(reading.humidity_pct),
        reading.air_quality_index.to_string(),
        reading.quality.to_string(),
    ];

    cells.iter().fold(Element::new("tr"), |row, value| {
        row.with_child(Element::new("td").with_text(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;

    fn rows(doc: &Document) -> Vec<Vec<String>> {
        doc.region(regions::TABLA_MEDICIONES)
            .map(|tbody| {
                tbody
                    .child_elements()
                    .map(|row| row.child_elements().map(|cell| cell.text()).collect())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn empty_table_has_one_spanning_cell() {
        let mut doc = Document::dashboard("Monitor");
        render(&mut doc, &[]).unwrap();

        let tbody = doc.region(regions::TABLA_MEDICIONES).unwrap();
        let row_list: Vec<&Element> = tbody.child_elements().collect();
        assert_eq!(row_list.len(), 1);

        let cells: Vec<&Element> = row_list[0].child_elements().collect();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].attr("colspan"), Some("5"));
        assert_eq!(cells[0].text(), NO_READINGS_TEXT);
    }

    #[test]
    fn rows_follow_input_order_with_formatting() {
        let mut doc = Document::dashboard("Monitor");
        let readings = vec![
            Reading::new("2025-12-26 08:00", 23.9, 52.0, 65, "Buena"),
            Reading::new("2025-12-26 06:30", 25.0, 58.5, 85, "Deficiente"),
        ];

        render(&mut doc, &readings).unwrap();

        assert_eq!(
            rows(&doc),
            vec![
                vec!["2025-12-26 08:00", "23.9", "52", "65", "Buena"],
                vec!["2025-12-26 06:30", "25.0", "59", "85", "Deficiente"],
            ]
        );
    }

    #[test]
    fn rerender_leaves_no_residual_rows() {
        let mut doc = Document::dashboard("Monitor");
        let first = vec![
            Reading::new("a", 23.9, 52.0, 65, "Buena"),
            Reading::new("b", 23.5, 50.0, 60, "Buena"),
            Reading::new("c", 24.2, 53.0, 70, "Moderada"),
        ];
        render(&mut doc, &first).unwrap();
        render(&mut doc, &[Reading::new("d", 21.0, 40.0, 30, "Buena")]).unwrap();

        assert_eq!(rows(&doc), vec![vec!["d", "21.0", "40", "30", "Buena"]]);
    }

    #[test]
    fn timestamp_is_escaped() {
        let mut doc = Document::dashboard("Monitor");
        render(&mut doc, &[Reading::new("<script>", 20.0, 40.0, 10, "Buena")]).unwrap();
        let html = doc.to_html();
        assert!(html.contains("<td>&lt;script&gt;</td>"));
    }

    #[test]
    fn missing_tbody_is_reported() {
        let mut doc = Document::from_root(Element::new("table"));
        let result = render(&mut doc, &[]);
        assert!(matches!(
            result,
            Err(BindError::MissingRegion {
                region: regions::TABLA_MEDICIONES,
                ..
            })
        ));
    }
}
