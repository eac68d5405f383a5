//! Build script to generate the image manifest for WASM builds
//!
//! Scans assets/images/ and writes a manifest listing every image file,
//! since WASM can't enumerate directories at runtime. Native builds read
//! the same manifest for parity.

use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn main() {
    println!("cargo:rerun-if-changed=assets/images");

    let images_dir = Path::new("assets/images");
    if !images_dir.exists() {
        return;
    }

    let mut names = Vec::new();
    collect_images(images_dir, images_dir, &mut names);
    names.sort();

    let mut manifest = String::new();
    for name in names {
        manifest.push_str(&name);
        manifest.push('\n');
    }

    fs::write(images_dir.join("manifest.txt"), manifest)
        .expect("failed to write image manifest");
}

/// Collect image paths relative to `base`, recursing into subdirectories.
fn collect_images(base: &Path, dir: &Path, names: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_images(base, &path, names);
        } else if is_image(&path) {
            if let Ok(rel) = path.strip_prefix(base) {
                names.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
