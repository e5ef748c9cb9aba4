use std::fs;
use std::path::{Path, PathBuf};

use stagekit_core::{
    IsfInputKind, IsfMetadata, OutputMode, convert_svg_file, parse_svg, render_shader,
};

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn run_golden(dir: &str) {
    let dir = repo_root().join(dir);
    let doc = parse_svg(&dir.join("input.svg")).expect("parse input.svg");
    let expected = fs::read_to_string(dir.join("expected.glsl")).expect("read expected.glsl");

    let actual = render_shader(&doc.polygons, doc.width, doc.height).expect("render shader");
    assert_eq!(actual.text, expected, "golden mismatch in {}", dir.display());
}

#[test]
fn golden_square() {
    run_golden("tests/golden/square");
}

#[test]
fn wings_fixture_counts() {
    let doc = parse_svg(&repo_root().join("tests/fixtures/wings.svg")).expect("parse wings");
    assert_eq!(doc.polygons.len(), 4);
    assert_eq!((doc.width, doc.height), (640.0, 480.0));

    let shader = render_shader(&doc.polygons, doc.width, doc.height).expect("render");
    assert_eq!(shader.summary.triangle_tests, 9);
    assert_eq!(shader.summary.parameters, 7);
    assert!(shader.text.contains("vec2 pixelCoord = uv * vec2(640.0, 480.0);"));
    assert!(shader.text.contains("vec2(12.500, 483.250)"));
    assert!(shader.text.contains("vec2(20.000, 446.667)"));
    assert!(shader.text.contains("{ alpha = poly3_alpha; }"));
    assert!(!shader.text.contains("poly4_alpha"));
}

#[test]
fn conversion_is_byte_identical_across_runs() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("wings.svg");
    fs::copy(repo_root().join("tests/fixtures/wings.svg"), &input).expect("copy fixture");

    let first = convert_svg_file(&input, OutputMode::Glsl).expect("first run");
    let first_text = fs::read(&first.output).expect("read first");
    let second = convert_svg_file(&input, OutputMode::Glsl).expect("second run");
    let second_text = fs::read(&second.output).expect("read second");

    assert_eq!(first.output, second.output);
    assert_eq!(first_text, second_text);
}

#[test]
fn unqualified_fixture_uses_fallback_lookup() {
    let doc = parse_svg(&repo_root().join("tests/fixtures/bare.svg")).expect("parse bare");
    assert_eq!(doc.polygons.len(), 1);
    assert_eq!(doc.polygons[0].len(), 3);
}

#[test]
fn metadata_input_kinds_are_nameable() {
    let meta = IsfMetadata::for_polygons(1);
    let kinds: Vec<IsfInputKind> = meta.inputs.iter().map(|input| input.kind).collect();
    assert_eq!(
        kinds,
        [
            IsfInputKind::Float,
            IsfInputKind::Float,
            IsfInputKind::Color,
            IsfInputKind::Color
        ]
    );
}
