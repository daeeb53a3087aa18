//! Build script: validates templates/index.html at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let template_path: PathBuf = [&manifest_dir, "templates", "index.html"].iter().collect();
    println!("cargo:rerun-if-changed={}", template_path.display());

    let source = std::fs::read_to_string(&template_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. The page template must exist.",
            template_path.display(),
            e
        )
    });
    let mut tera = tera::Tera::default();
    tera.add_raw_template("index.html", &source)
        .unwrap_or_else(|e| panic!("index.html is not a valid template: {}. Fix it and rebuild.", e));
}
