//! Recent alerts list

use crate::binders::style::{apply_style, severity_style};
use crate::binders::{require_region, BindError};
use crate::models::Alert;
use crate::surface::{regions, Element, Surface};

pub const NAME: &str = "alert list";

pub const NO_ALERTS_TEXT: &str = "Sin alertas registradas.";

/// Replace the list content with one entry per alert, in input order
pub fn render<S: Surface + ?Sized>(surface: &mut S, alerts: &[Alert]) -> Result<(), BindError> {
    let list = require_region(surface, NAME, regions::LISTA_ALERTAS)?;
    list.clear_children();

    if alerts.is_empty() {
        list.append_child(
            Element::new("li")
                .with_class("list-group-item")
                .with_text(NO_ALERTS_TEXT),
        );
        return Ok(());
    }

    for alert in alerts {
        list.append_child(alert_entry(alert));
    }

    Ok(())
}

fn alert_entry(alert: &Alert) -> Element {
    let mut details = Element::new("div").with_child(Element::new("strong").with_text(&alert.timestamp));
    details.append_markup("<br>");
    details.append_text(&alert.message);

    let mut badge = Element::new("span")
        .with_class("badge rounded-pill")
        .with_text(alert.severity.as_str());
    apply_style(&mut badge, severity_style(&alert.severity));

    Element::new("li")
        .with_class("list-group-item d-flex justify-content-between align-items-start")
        .with_child(details)
        .with_child(badge)
}
