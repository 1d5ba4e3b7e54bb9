use wasm_bindgen::prelude::*;

pub mod error;
pub mod logging;
pub mod plot;
pub mod sky;

pub use error::{Error, Result};
use plot::backdrop::Backdrop;
use plot::figure::Figure;
use plot::{render, Styling};
use sky::frames::{build_frame_table, FrameConfig, FrameTable};
use sky::PlanetarySystem;

/// Runs the builder and renderer for one built-in system.
pub fn light_travel_figure(
    system: PlanetarySystem,
    config: &FrameConfig,
    styling: &Styling,
    backdrop: Option<&Backdrop>,
) -> Result<Figure> {
    let table = build_frame_table(&system.table(), config)?;
    log::info!(
        "{} planets: {} frames, {} rows",
        system.label(),
        table.frame_count(),
        table.len()
    );
    render(&table, styling, backdrop)
}

fn frame_table_for(system: &str) -> Result<FrameTable> {
    let system: PlanetarySystem = system.parse()?;
    build_frame_table(&system.table(), &FrameConfig::default())
}

fn figure_for(system: PlanetarySystem, wallpaper: &[u8]) -> Result<Figure> {
    let backdrop = (!wallpaper.is_empty()).then(|| Backdrop::from_bytes(wallpaper));
    light_travel_figure(
        system,
        &FrameConfig::default(),
        &Styling::default(),
        backdrop.as_ref(),
    )
}

fn mount(container_id: &str, figure: &Figure) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Dom("no document".to_string()))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| Error::Dom(format!("no element with id {container_id:?}")))?;
    let script = document
        .create_element("script")
        .map_err(|_| Error::Dom("cannot create script element".to_string()))?;
    let plot_id = format!("{container_id}-plot");
    let target = document
        .create_element("div")
        .map_err(|_| Error::Dom("cannot create plot element".to_string()))?;
    target.set_id(&plot_id);
    script.set_text_content(Some(&figure.plot_script(&plot_id)?));
    container
        .append_child(&target)
        .and_then(|_| container.append_child(&script))
        .map_err(|_| Error::Dom("cannot attach plot".to_string()))?;
    Ok(())
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn setup() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init_console(log::LevelFilter::Info);
}

#[wasm_bindgen]
pub fn frame_table_json(system: &str) -> Result<String, JsValue> {
    frame_table_for(system)
        .and_then(|table| table.to_json())
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn figure_json(system: &str, wallpaper: &[u8]) -> Result<String, JsValue> {
    system
        .parse()
        .and_then(|system| figure_for(system, wallpaper))
        .and_then(|figure| figure.to_json())
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn random_figure_json(seed: u64, wallpaper: &[u8]) -> Result<String, JsValue> {
    figure_for(PlanetarySystem::from_seed(seed), wallpaper)
        .and_then(|figure| figure.to_json())
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn mount_figure(container_id: &str, system: &str, wallpaper: &[u8]) -> Result<(), JsValue> {
    system
        .parse()
        .and_then(|system| figure_for(system, wallpaper))
        .and_then(|figure| mount(container_id, &figure))
        .map_err(to_js)
}
