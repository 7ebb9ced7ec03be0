pub mod document;
pub mod element;

pub use document::Document;
pub use element::Element;

/// Identifiers of the regions the dashboard page exposes to the binders
pub mod regions {
    pub const TEMP_ACTUAL: &str = "temp-actual";
    pub const HUM_ACTUAL: &str = "hum-actual";
    pub const IAQ_ACTUAL: &str = "iaq-actual";
    pub const ESTADO_CALIDAD: &str = "estado-calidad";
    pub const ETIQUETA_ESTADO: &str = "etiqueta-estado";
    pub const CONFIG_INTERVALO: &str = "config-intervalo";
    pub const CONFIG_RANGO: &str = "config-rango";
    pub const CONFIG_UMBRAL: &str = "config-umbral";
    pub const LISTA_ALERTAS: &str = "lista-alertas";
    pub const TABLA_MEDICIONES: &str = "tabla-mediciones";
    /// Footer line with the generation time, not used by the binders
    pub const PIE_GENERADO: &str = "pie-generado";
}

/// A presentation surface made of named regions
///
/// Binders only talk to the page through this trait, so tests can hand them
/// any document, including one with regions missing.
pub trait Surface {
    fn region(&self, id: &str) -> Option<&Element>;

    fn region_mut(&mut self, id: &str) -> Option<&mut Element>;

    fn has_region(&self, id: &str) -> bool {
        self.region(id).is_some()
    }
}

/// Return the first identifier in `ids` that the surface does not expose
pub fn first_missing<'a, S: Surface + ?Sized>(surface: &S, ids: &[&'a str]) -> Option<&'a str> {
    ids.iter().copied().find(|id| !surface.has_region(id))
}
