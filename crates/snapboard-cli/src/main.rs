//! `snapboard` — replay drag gestures and preview overlay catalogs.
//!
//! Usage:
//!   snapboard replay <scene.json>
//!   snapboard picker <catalog.json>
//!
//! Set `RUST_LOG=debug` (or `trace`) to see session and snap decisions.

use anyhow::{Context, Result, bail};
use snapboard_cli::{Scene, render_catalog, render_replay, replay};
use snapboard_picker::{FileOverlaySource, PickerConfig, PickerModel};

const USAGE: &str = "usage: snapboard <replay|picker> <file.json>";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (Some(command), Some(path)) = (args.get(1), args.get(2)) else {
        bail!(USAGE);
    };

    match command.as_str() {
        // ── `snapboard replay <scene.json>` ─────────────────────────────
        "replay" => {
            let text =
                std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            let scene = Scene::from_json(&text)?;
            let steps = replay(&scene)?;
            print!("{}", render_replay(&steps));
        }
        // ── `snapboard picker <catalog.json>` ───────────────────────────
        "picker" => {
            let source = FileOverlaySource::new(path);
            let model = PickerModel::load(&source, PickerConfig::default())?;
            print!("{}", render_catalog(&model));
        }
        other => bail!("unknown command `{other}`\n{USAGE}"),
    }
    Ok(())
}
