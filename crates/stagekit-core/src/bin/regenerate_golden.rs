use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use stagekit_core::{parse_svg, render_shader};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.svg");
        if !input.exists() {
            continue;
        }
        regenerate_one(&input, &path.join("expected.glsl"))?;
    }

    Ok(())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let doc = parse_svg(input)
        .map_err(|err| format!("SVG parsing failed for {}: {}", input.display(), err))?;
    let shader = render_shader(&doc.polygons, doc.width, doc.height)
        .map_err(|err| format!("shader rendering failed for {}: {}", input.display(), err))?;
    fs::write(output, shader.text)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    println!(
        "{} -> {} ({} triangle tests)",
        input.display(),
        output.display(),
        shader.summary.triangle_tests
    );
    Ok(())
}
