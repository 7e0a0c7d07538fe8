//! Silhouette demo: evaluates a preset, applies a few slider edits, and
//! prints the resulting design record and fill polygon summary.
//!
//! Usage:
//! ```text
//! cargo run --example silhouette_demo                   # default (Sedan)
//! cargo run --example silhouette_demo -- SUV
//! RUST_LOG=silhouette=debug cargo run --example silhouette_demo -- Coupe
//! ```

use silhouette::catalog::Catalog;
use silhouette::editor::{ShapeEditor, SliderRanges};
use silhouette::operations::query::FillArea;
use silhouette::record::{Adjective, DesignRecord};
use silhouette::tessellation::SampleParams;
use silhouette::Result;
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for silhouette.
    // Override with RUST_LOG env var (e.g. RUST_LOG=silhouette=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("silhouette=info".parse().unwrap_or_default())
        .add_directive("silhouette_demo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "Sedan".to_owned());
    let catalog = Catalog::builtin()?;
    let model = catalog.get(&name)?;

    let mut editor = ShapeEditor::new(model, SliderRanges::default(), SampleParams::default())?;
    let preset_area = FillArea::new(&editor.snapshot()?).execute()?;

    // Raise the roof line a little and stiffen the rear pillar.
    let mid = editor.points().len() / 2;
    let roof = editor.points()[mid];
    editor.set_point(mid, roof.x, roof.y + 0.5)?;
    let rear = editor.weights()[mid + 1];
    editor.set_weight(mid + 1, rear * 2.0)?;

    let frame = editor.refresh()?;
    let edited_area = FillArea::new(&frame.curve).execute()?;
    if let Some(bounds) = frame.silhouette.bounds() {
        info!(
            width = bounds.width(),
            height = bounds.height(),
            "scene bounds"
        );
    }
    info!(
        model = %model.name,
        samples = frame.silhouette.outline.len(),
        fill_vertices = frame.silhouette.fill.len(),
        preset_area,
        edited_area,
        "evaluated silhouette"
    );
    info!("{}", editor.weight_label());

    let record = DesignRecord::from_editor(&editor)
        .with_opacity(0.3)
        .with_adjective(Adjective::Cool);
    println!("{}", record.to_json()?);
    Ok(())
}
