//! Trunk post-build hook: make the staged page load its bundle relative
//! to wherever `dist/` ends up being served from.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

const BUNDLE_NAME: &str = "futurescape-portal";
const STAGED_HTML: &str = "index.html";

fn main() -> io::Result<()> {
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|error| io::Error::new(io::ErrorKind::NotFound, error))?;
    let staged_html_path = PathBuf::from(staging_dir).join(STAGED_HTML);

    let html = fs::read_to_string(&staged_html_path)?;
    let html = html
        .replace(&format!("/{BUNDLE_NAME}.js"), &format!("./{BUNDLE_NAME}.js"))
        .replace(
            &format!("/{BUNDLE_NAME}_bg.wasm"),
            &format!("./{BUNDLE_NAME}_bg.wasm"),
        );

    fs::write(&staged_html_path, html)?;
    println!("Rewrote bundle paths in {}", staged_html_path.display());
    Ok(())
}
