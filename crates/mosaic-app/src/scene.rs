//! Scene files and the stdout sink.

use std::io::Read;
use std::path::Path;

use mosaic_common::types::{Rect, Size};
use mosaic_common::{MosaicError, Result};
use mosaic_tiling::{ElementSnapshot, LayoutSink, TileSource};
use serde::{Deserialize, Serialize};

/// A container and its children, as read from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub container: Size,
    #[serde(default)]
    pub tiles: Vec<ElementSnapshot>,
}

impl Scene {
    /// `count` plain tiles, with the tiles at `big` flagged big.
    pub fn synthetic(container: Size, count: usize, big: &[usize]) -> Result<Self> {
        if let Some(index) = big.iter().find(|&&index| index >= count) {
            return Err(MosaicError::Other(format!(
                "big tile index {index} is out of range for {count} tiles"
            )));
        }
        let tiles = (0..count)
            .map(|index| ElementSnapshot {
                big: big.contains(&index),
                ..ElementSnapshot::default()
            })
            .collect();
        Ok(Self { container, tiles })
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a scene file; `-` reads stdin.
    pub fn load(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            return Self::from_reader(std::io::stdin().lock());
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Override either container dimension.
    pub fn resize(&mut self, width: Option<f64>, height: Option<f64>) {
        if let Some(width) = width {
            self.container.width = width;
        }
        if let Some(height) = height {
            self.container.height = height;
        }
    }
}

impl TileSource for Scene {
    fn container_size(&self) -> Size {
        self.container
    }

    fn elements(&self) -> Vec<ElementSnapshot> {
        self.tiles.clone()
    }
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEntry {
    pub index: usize,
    pub rect: Option<Rect>,
}

/// Collects sink calls into output entries.
#[derive(Debug, Default)]
pub struct SlotCollector {
    entries: Vec<SlotEntry>,
}

impl SlotCollector {
    /// Entries in tile order.
    pub fn into_entries(mut self) -> Vec<SlotEntry> {
        self.entries.sort_by_key(|entry| entry.index);
        self.entries
    }
}

impl LayoutSink for SlotCollector {
    fn apply(&mut self, index: usize, rect: Rect) {
        self.entries.push(SlotEntry {
            index,
            rect: Some(rect),
        });
    }

    fn hide(&mut self, index: usize) {
        self.entries.push(SlotEntry { index, rect: None });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_config::LayoutOptions;
    use mosaic_tiling::LayoutContainer;

    fn run(scene: &Scene) -> Vec<SlotEntry> {
        let container = LayoutContainer::new(LayoutOptions::default()).unwrap();
        let mut sink = SlotCollector::default();
        container.layout(scene, &mut sink);
        sink.into_entries()
    }

    #[test]
    fn reads_scene_json() {
        let json = r#"{
            "container": {"width": 400, "height": 300},
            "tiles": [
                {"big": true, "insets": {"top": 5, "right": 5, "bottom": 5, "left": 5}},
                {},
                {"visible": false}
            ]
        }"#;
        let scene = Scene::from_reader(json.as_bytes()).unwrap();
        assert_eq!(scene.container, Size::new(400.0, 300.0));
        assert_eq!(scene.tiles.len(), 3);

        let entries = run(&scene);
        assert_eq!(entries[0].rect, Some(Rect::new(5.0, 5.0, 310.0, 290.0)));
        assert_eq!(entries[1].rect, Some(Rect::new(320.0, 90.0, 80.0, 120.0)));
        assert_eq!(entries[2].rect, None);
    }

    #[test]
    fn missing_tiles_is_empty_scene() {
        let scene = Scene::from_reader(r#"{"container": {"width": 1, "height": 1}}"#.as_bytes())
            .unwrap();
        assert!(scene.tiles.is_empty());
        assert!(run(&scene).is_empty());
    }

    #[test]
    fn malformed_scene_is_an_error() {
        let err = Scene::from_reader("{\"tiles\": []}".as_bytes()).unwrap_err();
        assert!(matches!(err, MosaicError::Scene(_)));
    }

    #[test]
    fn synthetic_scene_flags_big_tiles() {
        let scene = Scene::synthetic(Size::new(400.0, 300.0), 5, &[0, 1]).unwrap();
        assert!(scene.tiles[0].big && scene.tiles[1].big);
        assert!(!scene.tiles[2].big);

        let entries = run(&scene);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[2].rect, Some(Rect::new(320.0, 0.0, 80.0, 100.0)));
    }

    #[test]
    fn synthetic_rejects_out_of_range_big_index() {
        let err = Scene::synthetic(Size::new(400.0, 300.0), 2, &[2]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn resize_overrides_one_axis() {
        let mut scene = Scene::synthetic(Size::new(400.0, 300.0), 1, &[]).unwrap();
        scene.resize(Some(1000.0), None);
        assert_eq!(scene.container, Size::new(1000.0, 300.0));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(
            &path,
            r#"{"container": {"width": 400, "height": 300}, "tiles": [{}, {}]}"#,
        )
        .unwrap();
        let scene = Scene::load(&path).unwrap();
        assert_eq!(run(&scene)[1].rect, Some(Rect::new(200.0, 0.0, 200.0, 300.0)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Scene::load(Path::new("/nonexistent/mosaic/scene.json")).unwrap_err();
        assert!(matches!(err, MosaicError::Io(_)));
    }

    #[test]
    fn output_serializes_null_for_hidden() {
        let entries = vec![
            SlotEntry {
                index: 0,
                rect: Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
            },
            SlotEntry {
                index: 1,
                rect: None,
            },
        ];
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"index": 0, "rect": {"x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0}},
                {"index": 1, "rect": null}
            ])
        );
    }
}
