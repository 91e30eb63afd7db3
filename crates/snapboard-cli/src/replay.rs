//! Scene replay.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use snapboard_core::{EditorConfig, Rect, Size};
use snapboard_editor::{
    DragTool, DragUpdate, EditorSession, GuideLine, GuideOverlay, InputEvent,
};

/// A canvas, its items, and one drag gesture on the selected item.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub canvas: Size,
    #[serde(default)]
    pub config: EditorConfig,
    pub items: Vec<Rect>,
    /// Index into `items` of the item to drag.
    pub select: usize,
    /// Pointer positions; the first is the press, the rest are moves.
    #[serde(default)]
    pub drag: Vec<(f32, f32)>,
}

impl Scene {
    pub fn from_json(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text).context("invalid scene JSON")?;
        scene.config.validate()?;
        Ok(scene)
    }
}

/// The outcome of one pointer move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub frame: Rect,
    pub guides: GuideOverlay,
    pub pulse: bool,
}

/// Run the scene's drag through a fresh session.
pub fn replay(scene: &Scene) -> Result<Vec<ReplayStep>> {
    let mut session = EditorSession::new(scene.canvas, scene.config);
    let ids: Vec<_> = scene.items.iter().map(|f| session.insert_item(*f)).collect();
    let Some(&target) = ids.get(scene.select) else {
        anyhow::bail!(
            "`select` is {} but the scene has {} items",
            scene.select,
            ids.len()
        );
    };
    session.select(target);

    let mut tool = DragTool::new();
    let mut steps = Vec::new();
    let Some((&(x, y), moves)) = scene.drag.split_first() else {
        log::warn!("scene has no drag points");
        return Ok(steps);
    };

    tool.handle(&InputEvent::PointerDown { x, y }, &mut session);
    let mut last = (x, y);
    for &(x, y) in moves {
        last = (x, y);
        if let DragUpdate::Moved {
            frame,
            guides,
            pulse,
            ..
        } = tool.handle(&InputEvent::PointerMove { x, y }, &mut session)
        {
            steps.push(ReplayStep {
                frame,
                guides,
                pulse,
            });
        }
    }
    tool.handle(
        &InputEvent::PointerUp {
            x: last.0,
            y: last.1,
        },
        &mut session,
    );
    Ok(steps)
}

/// One line per step: frame, guide positions (`-` when hidden), and `*`
/// when the step pulses.
pub fn render_replay(steps: &[ReplayStep]) -> String {
    fn guide(line: Option<GuideLine>) -> String {
        line.map_or_else(|| "-".to_string(), |l| l.position.to_string())
    }

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let f = step.frame;
            format!(
                "{i:>3}  frame ({}, {}, {}, {})  x={}  y={}{}\n",
                f.x,
                f.y,
                f.width,
                f.height,
                guide(step.guides.vertical),
                guide(step.guides.horizontal),
                if step.pulse { "  *" } else { "" }
            )
        })
        .collect()
}
