//! Build script for lgo-dashboard.
//!
//! Copies the catalog fixtures (measure groups, councils) into OUT_DIR so
//! they can be embedded via `include_str!`. A missing fixture is replaced
//! by a header-only placeholder so the app still builds.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = vec![
        (
            "../fixtures/measure_groups.csv",
            "measure_groups.csv",
            "Measure Group Description\n",
        ),
        (
            "../fixtures/councils.csv",
            "councils.csv",
            "Geographical Description,Council region\n",
        ),
    ];

    for (src_path, dest_name, placeholder) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, placeholder).unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using header-only placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
