//! Alignment of several elements along a shared edge or center line.

use crate::element::{DesignElement, ElementId, ElementPatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    /// Horizontal centers.
    Center,
    Right,
    Top,
    /// Vertical centers.
    Middle,
    Bottom,
}

/// Position updates that align `elements`. Fewer than two elements yield
/// nothing.
pub fn alignment_patches(
    elements: &[&DesignElement],
    alignment: Alignment,
) -> Vec<(ElementId, ElementPatch)> {
    if elements.len() < 2 {
        return Vec::new();
    }
    let count = elements.len() as f64;
    let min = |f: fn(&DesignElement) -> f64| {
        elements.iter().map(|el| f(el)).fold(f64::INFINITY, f64::min)
    };
    let max = |f: fn(&DesignElement) -> f64| {
        elements.iter().map(|el| f(el)).fold(f64::NEG_INFINITY, f64::max)
    };
    let mean = |f: fn(&DesignElement) -> f64| elements.iter().map(|el| f(el)).sum::<f64>() / count;

    let anchor = match alignment {
        Alignment::Left => min(|el| el.x),
        Alignment::Center => mean(|el| el.x + el.width / 2.0),
        Alignment::Right => max(|el| el.x + el.width),
        Alignment::Top => min(|el| el.y),
        Alignment::Middle => mean(|el| el.y + el.height / 2.0),
        Alignment::Bottom => max(|el| el.y + el.height),
    };

    elements
        .iter()
        .map(|el| {
            let patch = match alignment {
                Alignment::Left => ElementPatch::new().with_x(anchor),
                Alignment::Center => ElementPatch::new().with_x(anchor - el.width / 2.0),
                Alignment::Right => ElementPatch::new().with_x(anchor - el.width),
                Alignment::Top => ElementPatch::new().with_y(anchor),
                Alignment::Middle => ElementPatch::new().with_y(anchor - el.height / 2.0),
                Alignment::Bottom => ElementPatch::new().with_y(anchor - el.height),
            };
            (el.id().clone(), patch)
        })
        .collect()
}
