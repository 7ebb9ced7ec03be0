//! Binders that project dashboard data onto the page regions
//!
//! Each binder checks that all of its regions exist before writing anything,
//! so a missing region leaves the page untouched for that binder.

pub mod alerts;
pub mod config;
pub mod current;
pub mod readings;
pub mod style;

use log::{debug, warn};
use thiserror::Error;

use crate::surface::{first_missing, Element, Surface};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("{binder}: region '{region}' not found on the page")]
    MissingRegion {
        binder: &'static str,
        region: &'static str,
    },
}

/// Fail with `MissingRegion` unless every region in `ids` exists
pub(crate) fn require_regions<S: Surface + ?Sized>(
    surface: &S,
    binder: &'static str,
    ids: &[&'static str],
) -> Result<(), BindError> {
    match first_missing(surface, ids) {
        Some(region) => Err(missing(binder, region)),
        None => Ok(()),
    }
}

/// Look up the single region a binder writes to, or fail with `MissingRegion`
pub(crate) fn require_region<'s, S: Surface + ?Sized>(
    surface: &'s mut S,
    binder: &'static str,
    id: &'static str,
) -> Result<&'s mut Element, BindError> {
    match surface.region_mut(id) {
        Some(region) => Ok(region),
        None => Err(missing(binder, id)),
    }
}

fn missing(binder: &'static str, region: &'static str) -> BindError {
    warn!("{}: region '{}' not found, skipping render", binder, region);
    BindError::MissingRegion { binder, region }
}

/// Replace the text of a region that has already been checked
pub(crate) fn write_text<S: Surface + ?Sized>(surface: &mut S, id: &str, text: &str) {
    if let Some(region) = surface.region_mut(id) {
        debug!("{} <- {}", id, text);
        region.set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{regions, Document};

    #[test]
    fn require_region_returns_the_element() {
        let mut doc = Document::from_root(
            Element::new("body").with_child(Element::new("ul").with_id(regions::LISTA_ALERTAS)),
        );

        let list = require_region(&mut doc, "test", regions::LISTA_ALERTAS).unwrap();
        list.append_text("ok");

        assert_eq!(doc.region(regions::LISTA_ALERTAS).map(|r| r.text()).as_deref(), Some("ok"));
    }

    #[test]
    fn require_region_reports_absent_region() {
        let mut doc = Document::from_root(Element::new("body"));

        assert_eq!(
            require_region(&mut doc, "test", regions::TABLA_MEDICIONES).unwrap_err(),
            BindError::MissingRegion {
                binder: "test",
                region: regions::TABLA_MEDICIONES,
            }
        );
    }

    #[test]
    fn require_regions_names_first_absent_region() {
        let doc = Document::from_root(
            Element::new("body").with_child(Element::new("span").with_id(regions::TEMP_ACTUAL)),
        );

        assert!(require_regions(&doc, "test", &[regions::TEMP_ACTUAL]).is_ok());
        assert_eq!(
            require_regions(&doc, "test", &[regions::TEMP_ACTUAL, regions::HUM_ACTUAL]),
            Err(BindError::MissingRegion {
                binder: "test",
                region: regions::HUM_ACTUAL,
            })
        );
    }
}
