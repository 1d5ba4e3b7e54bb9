#[cfg(not(target_arch = "wasm32"))]
fn main() -> light_minutes::Result<()> {
    use light_minutes::plot::backdrop::{Backdrop, DEFAULT_BACKDROP_PATH};
    use light_minutes::plot::Styling;
    use light_minutes::sky::frames::FrameConfig;
    use light_minutes::sky::PlanetarySystem;

    const OUTPUT_PATH: &str = "light_minutes.html";

    light_minutes::logging::init_env();

    let backdrop = Backdrop::load(DEFAULT_BACKDROP_PATH)?;
    let figure = light_minutes::light_travel_figure(
        PlanetarySystem::Outer,
        &FrameConfig::default(),
        &Styling::default(),
        Some(&backdrop),
    )?;

    std::fs::write(OUTPUT_PATH, figure.to_html()?)?;
    log::info!(
        "chart written to {} (the page loads plotly.js from {}, so viewing it needs network access)",
        OUTPUT_PATH,
        light_minutes::plot::PLOTLY_JS_URL
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
