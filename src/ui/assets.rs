// SPDX-License-Identifier: MPL-2.0
//! Embedded image assets.
//!
//! Images are embedded at compile time and their handles are cached with
//! `OnceLock`, so every render reuses the same decoded data.

use iced::widget::svg::Handle;
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct Images;

const ILLUSTRATION_FILE: &str = "compose-multiplatform.svg";

/// Illustration revealed by the greeting button.
///
/// Returns `None` if the asset is missing from the build.
pub fn illustration() -> Option<Handle> {
    static HANDLE: OnceLock<Option<Handle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            let file = Images::get(ILLUSTRATION_FILE);
            if file.is_none() {
                log::warn!("embedded asset {ILLUSTRATION_FILE} not found");
            }
            file.map(|file| Handle::from_memory(file.data))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustration_is_embedded() {
        assert!(illustration().is_some());
    }

    #[test]
    fn illustration_is_svg() {
        let file = Images::get(ILLUSTRATION_FILE).expect("asset should be embedded");
        let text = String::from_utf8_lossy(file.data.as_ref());
        assert!(text.contains("<svg"));
    }
}
