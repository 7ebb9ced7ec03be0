//! Status card for the most recent reading

use crate::binders::style::{apply_style, quality_style};
use crate::binders::{require_regions, write_text, BindError};
use crate::models::Reading;
use crate::surface::{regions, Surface};
use crate::utils::{format_humidity, format_temperature};

pub const NAME: &str = "current reading";

const REGIONS: [&str; 5] = [
    regions::TEMP_ACTUAL,
    regions::HUM_ACTUAL,
    regions::IAQ_ACTUAL,
    regions::ESTADO_CALIDAD,
    regions::ETIQUETA_ESTADO,
];

/// Write the reading values, quality title and styled quality badge
pub fn render<S: Surface + ?Sized>(surface: &mut S, reading: &Reading) -> Result<(), BindError> {
    require_regions(surface, NAME, &REGIONS)?;

    let label = reading.quality.as_str();
    write_text(surface, regions::TEMP_ACTUAL, &format_temperature(reading.temperature_c));
    write_text(surface, regions::HUM_ACTUAL, &format_humidity(reading.humidity_pct));
    write_text(surface, regions::IAQ_ACTUAL, &reading.air_quality_index.to_string());
    write_text(surface, regions::ESTADO_CALIDAD, label);
    write_text(surface, regions::ETIQUETA_ESTADO, label);

    if let Some(badge) = surface.region_mut(regions::ETIQUETA_ESTADO) {
        apply_style(badge, quality_style(&reading.quality));
    }

    Ok(())
}
