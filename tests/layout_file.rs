//! Layout files on disk: loading, editing and writing back.

use keyoverlay::style::{Color, StyleSheet};
use keyoverlay::{Boundary, KeyDefinition, KeyKind, Layout, LayoutError, MouseButton, Point};

const LAYOUT: &str = r#"
name = "wasd"
width = 200
height = 100

[[key]]
id = 0
text = "W"
boundary = [[40, 0], [80, 0], [80, 40], [40, 40]]
type = "keyboard"
code = 17

[[key]]
id = 1
text = "A"
boundary = [[0, 40], [40, 40], [40, 80], [0, 80]]
type = "keyboard"
code = 30

[[key]]
id = 2
text = "S"
boundary = [[40, 40], [80, 40], [80, 80], [40, 80]]
type = "keyboard"
code = 31
shift_text = "s"
change_on_caps = true

[[key]]
id = 3
text = "LMB"
boundary = [[120, 0], [160, 0], [160, 60], [120, 60]]
text_position = [140, 20]
type = "mouse"
button = 1
"#;

fn write_layout(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("layout.toml");
    std::fs::write(&path, LAYOUT).unwrap();
    path
}

#[test]
fn load_reads_every_key() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::load(&write_layout(&dir)).unwrap();
    assert_eq!(layout.name, "wasd");
    assert_eq!(layout.keys().len(), 4);

    let s = layout.get(2).unwrap();
    match &s.kind {
        KeyKind::Keyboard(k) => {
            assert_eq!(k.code, 31);
            assert_eq!(k.shift_text.as_deref(), Some("s"));
            assert!(k.change_on_caps);
        }
        other => panic!("unexpected kind {other:?}"),
    }

    let mouse = layout.get(3).unwrap();
    assert!(matches!(&mouse.kind, KeyKind::Mouse(m) if m.button == MouseButton::Left));
    assert_eq!(mouse.text_position(), Point::new(140, 20));
}

#[test]
fn edits_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(&dir);
    let mut layout = Layout::load(&path).unwrap();

    layout.merge(0, &[2]).unwrap();
    layout.move_key(3, 10, -5).unwrap();
    let extra = Boundary::rectangle(80, 40, 40, 40).unwrap();
    layout
        .add(KeyDefinition::keyboard(layout.next_id().unwrap(), "D", extra, 32))
        .unwrap();

    let out = dir.path().join("edited.toml");
    layout.save(&out).unwrap();
    let back = Layout::load(&out).unwrap();
    assert_eq!(back, layout);

    let merged = back.get(0).unwrap();
    assert_eq!(merged.bounding_box(), keyoverlay::Rect::new(40, 0, 80, 80));
    assert_eq!(back.get(3).unwrap().text_position(), Point::new(150, 15));
    assert!(back.get(2).is_none());
    assert_eq!(back.get(4).unwrap().text, "D");
}

#[test]
fn invalid_boundary_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    let text = LAYOUT.replace(
        "[[40, 0], [80, 0], [80, 40], [40, 40]]",
        "[[40, 0], [80, 40], [80, 0], [40, 40]]",
    );
    std::fs::write(&path, text).unwrap();
    assert!(matches!(Layout::load(&path), Err(LayoutError::Config(_))));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Layout::load(&path).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn style_sheet_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    let mut sheet = StyleSheet::default();
    let mut style = sheet.default_key.clone();
    style.pressed.background = Color::rgba(0x10, 0x20, 0x30, 0x80);
    sheet.set(2, style);
    sheet.save(&path).unwrap();
    assert_eq!(StyleSheet::load(&path).unwrap(), sheet);
}
