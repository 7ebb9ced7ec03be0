//! Dashboard page document, the production implementation of `Surface`

use crate::surface::element::Element;
use crate::surface::regions;
use crate::surface::Surface;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Column headers of the readings table, in cell order
pub const TABLE_HEADERS: [&str; 5] = ["Fecha", "Temperatura (°C)", "Humedad (%)", "IAQ", "Estado"];

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap an arbitrary element tree, such as a page with regions missing
    #[cfg(test)]
    pub fn from_root(root: Element) -> Self {
        Document { root }
    }

    /// Build the full dashboard page with every region empty
    pub fn dashboard(title: &str) -> Self {
        let head = Element::new("head")
            .with_child(Element::new("meta").with_attr("charset", "utf-8"))
            .with_child(
                Element::new("meta")
                    .with_attr("name", "viewport")
                    .with_attr("content", "width=device-width, initial-scale=1"),
            )
            .with_child(Element::new("title").with_text(title))
            .with_child(
                Element::new("link")
                    .with_attr("rel", "stylesheet")
                    .with_attr("href", BOOTSTRAP_CSS),
            );

        let header = Element::new("header")
            .with_class("bg-dark text-white py-3 mb-4")
            .with_child(
                Element::new("div")
                    .with_class("container")
                    .with_child(Element::new("h1").with_class("h3 mb-0").with_text(title)),
            );

        let cards = Element::new("div")
            .with_class("row g-4 mb-4")
            .with_child(column("col-md-6", status_card()))
            .with_child(column("col-md-6", config_card()));

        let lower = Element::new("div")
            .with_class("row g-4")
            .with_child(column("col-lg-4", alerts_card()))
            .with_child(column("col-lg-8", readings_card()));

        let footer = Element::new("footer")
            .with_class("container text-muted small py-4")
            .with_child(Element::new("span").with_id(regions::PIE_GENERADO));

        let body = Element::new("body")
            .with_class("bg-light")
            .with_child(header)
            .with_child(
                Element::new("main")
                    .with_class("container")
                    .with_child(cards)
                    .with_child(lower),
            )
            .with_child(footer);

        let root = Element::new("html")
            .with_attr("lang", "es")
            .with_child(head)
            .with_child(body);

        Document { root }
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.root.to_html())
    }
}

impl Surface for Document {
    fn region(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }
}

fn column(class: &str, card: Element) -> Element {
    Element::new("div").with_class(class).with_child(card)
}

fn card(title: &str, body: Element) -> Element {
    Element::new("div")
        .with_class("card shadow-sm h-100")
        .with_child(
            Element::new("div")
                .with_class("card-header fw-semibold")
                .with_text(title),
        )
        .with_child(body)
}

/// A `<p>` with a bold caption, a value region and an optional unit
fn value_line(caption: &str, region: &str, unit: &str) -> Element {
    let mut line = Element::new("p")
        .with_class("mb-1")
        .with_child(Element::new("strong").with_text(caption))
        .with_text(" ")
        .with_child(Element::new("span").with_id(region));
    if !unit.is_empty() {
        line.append_text(unit);
    }
    line
}

fn status_card() -> Element {
    let title_row = Element::new("div")
        .with_class("d-flex justify-content-between align-items-center mb-3")
        .with_child(
            Element::new("h2")
                .with_class("h5 mb-0")
                .with_id(regions::ESTADO_CALIDAD),
        )
        .with_child(
            Element::new("span")
                .with_class("badge bg-secondary")
                .with_id(regions::ETIQUETA_ESTADO),
        );

    let body = Element::new("div")
        .with_class("card-body")
        .with_child(title_row)
        .with_child(value_line("Temperatura:", regions::TEMP_ACTUAL, " °C"))
        .with_child(value_line("Humedad:", regions::HUM_ACTUAL, " %"))
        .with_child(value_line("IAQ:", regions::IAQ_ACTUAL, ""));

    card("Estado actual", body)
}

fn config_card() -> Element {
    let body = Element::new("div")
        .with_class("card-body")
        .with_child(value_line(
            "Intervalo de muestreo:",
            regions::CONFIG_INTERVALO,
            " s",
        ))
        .with_child(value_line("Rango mostrado:", regions::CONFIG_RANGO, " h"))
        .with_child(value_line("Umbral crítico (IAQ):", regions::CONFIG_UMBRAL, ""));

    card("Configuración", body)
}

fn alerts_card() -> Element {
    let list = Element::new("ul")
        .with_class("list-group list-group-flush")
        .with_id(regions::LISTA_ALERTAS);

    card("Alertas recientes", list)
}

fn readings_card() -> Element {
    let header_row = TABLE_HEADERS
        .iter()
        .fold(Element::new("tr"), |row, header| {
            row.with_child(Element::new("th").with_attr("scope", "col").with_text(header))
        });

    let table = Element::new("table")
        .with_class("table table-sm table-striped mb-0")
        .with_child(Element::new("thead").with_child(header_row))
        .with_child(Element::new("tbody").with_id(regions::TABLA_MEDICIONES));

    card(
        "Mediciones",
        Element::new("div").with_class("table-responsive").with_child(table),
    )
}
