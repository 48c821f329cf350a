//! Static files compiled into the binary and served under `/static/`.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static"]
pub struct StaticAssets;

/// Returns the file body and its content type.
pub fn lookup(path: &str) -> Option<(Vec<u8>, String)> {
    if path.is_empty() {
        return None;
    }
    StaticAssets::get(path).map(|file| {
        let mime = file.metadata.mimetype().to_string();
        (file.data.into_owned(), mime)
    })
}
