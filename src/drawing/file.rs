// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing a stroke session as JSON.
//!
//! The file is a list of strokes:
//!
//! ```json
//! [{ "points": [[10.0, 12.5], [14.0, 18.0]], "color": [0, 0, 0, 255], "width": 8.0 }]
//! ```
//!
//! `color` is optional and defaults to opaque black.

use super::stroke::{Stroke, StrokeSession};
use crate::error::{Error, Result};
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StrokeRecord {
    points: Vec<[f64; 2]>,
    #[serde(default = "opaque_black")]
    color: [u8; 4],
    width: f64,
}

fn opaque_black() -> [u8; 4] {
    [0, 0, 0, 255]
}

impl From<StrokeRecord> for Stroke {
    fn from(record: StrokeRecord) -> Self {
        let [r, g, b, a] = record.color;
        let points = record.points.into_iter().map(|[x, y]| Point::new(x, y)).collect();
        Stroke::from_points(points, Color::from_rgba8(r, g, b, a), record.width)
    }
}

impl From<&Stroke> for StrokeRecord {
    fn from(stroke: &Stroke) -> Self {
        let rgba = stroke.color().to_rgba8();
        Self {
            points: stroke.points().iter().map(|p| [p.x, p.y]).collect(),
            color: [rgba.r, rgba.g, rgba.b, rgba.a],
            width: stroke.width(),
        }
    }
}

impl StrokeSession {
    /// Parse a session from JSON text; empty strokes are dropped
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let records: Vec<StrokeRecord> = serde_json::from_str(text)?;
        Ok(records.into_iter().map(Stroke::from).collect())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<StrokeRecord> = self.iter().map(StrokeRecord::from).collect();
        serde_json::to_string_pretty(&records)
    }

    /// Load a session from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let session = Self::from_json(&text).map_err(|e| Error::json(path, e))?;
        tracing::info!(
            "Loaded {} strokes ({} points) from {}",
            session.len(),
            session.total_points(),
            path.display()
        );
        Ok(session)
    }

    /// Write the session to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json().map_err(|e| Error::json(path, e))?;
        std::fs::write(path, text).map_err(|e| Error::io(path, e))?;
        tracing::debug!("Saved {} strokes to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let session = StrokeSession::from_json(
            r#"[
                {"points": [[0, 0], [10, 5]], "color": [255, 111, 97, 255], "width": 20},
                {"points": [[3.5, 4.5]], "width": 8},
                {"points": [], "width": 8}
            ]"#,
        )
        .unwrap();

        assert_eq!(session.len(), 2);
        let first = &session.strokes()[0];
        assert_eq!(first.points()[1], Point::new(10.0, 5.0));
        assert_eq!(first.width(), 20.0);
        assert_eq!(first.color().to_rgba8(), Color::from_rgb8(255, 111, 97).to_rgba8());
        assert_eq!(session.strokes()[1].color().to_rgba8(), Color::BLACK.to_rgba8());
    }

    #[test]
    fn test_missing_width_is_rejected() {
        assert!(StrokeSession::from_json(r#"[{"points": [[0, 0]]}]"#).is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strokes.json");
        let session: StrokeSession = [Stroke::from_points(
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            Color::from_rgba8(10, 20, 30, 255),
            6.0,
        )]
        .into_iter()
        .collect();

        session.save(&path).unwrap();
        let loaded = StrokeSession::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.strokes()[0].points(), session.strokes()[0].points());
        assert_eq!(
            loaded.strokes()[0].color().to_rgba8(),
            Color::from_rgba8(10, 20, 30, 255).to_rgba8()
        );
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();
        match StrokeSession::load(&path) {
            Err(Error::Json { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected JSON error, got {other:?}"),
        }
        assert!(matches!(
            StrokeSession::load(&dir.path().join("missing.json")),
            Err(Error::Io { .. })
        ));
    }
}
