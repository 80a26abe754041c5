use std::collections::HashMap;

use egui::{ColorImage, TextureHandle, TextureOptions};
use log::warn;

/// Cache key for the locally picked file's preview.
pub const PREVIEW_KEY: &str = "preview://selected";

pub enum Picture {
    Loading,
    Ready(TextureHandle),
    /// The bytes could not be fetched or decoded. The entry stays flagged
    /// so the UI can show "unavailable" in place without dropping the
    /// surrounding record.
    Broken,
}

/// URL-keyed cache of decoded images uploaded as egui textures.
#[derive(Default)]
pub struct PictureStore {
    cache: HashMap<String, Picture>,
}

impl PictureStore {
    pub fn get(&self, key: &str) -> Option<&Picture> {
        self.cache.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    pub fn mark_loading(&mut self, key: &str) {
        self.cache.insert(key.to_owned(), Picture::Loading);
    }

    pub fn mark_broken(&mut self, key: &str) {
        self.cache.insert(key.to_owned(), Picture::Broken);
    }

    /// Decode and upload fetched bytes; a decode failure flags the key
    /// broken instead of propagating.
    pub fn insert_bytes(&mut self, ctx: &egui::Context, key: &str, bytes: &[u8]) {
        let picture = match decode_color_image(bytes) {
            Ok(image) => {
                Picture::Ready(ctx.load_texture(key.to_owned(), image, TextureOptions::LINEAR))
            }
            Err(err) => {
                warn!("could not decode image for {key}: {err}");
                Picture::Broken
            }
        };
        self.cache.insert(key.to_owned(), picture);
    }

    /// Forget broken entries so a fresh history load retries them.
    pub fn clear_broken(&mut self) {
        self.cache.retain(|_, picture| !matches!(picture, Picture::Broken));
    }

    pub fn has_loading(&self) -> bool {
        self.cache.values().any(|picture| matches!(picture, Picture::Loading))
    }
}

fn decode_color_image(bytes: &[u8]) -> Result<ColorImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_valid_png() {
        let decoded = decode_color_image(&png_bytes(3, 2)).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_color_image(b"not an image").is_err());
    }

    #[test]
    fn test_insert_garbage_flags_broken() {
        let ctx = egui::Context::default();
        let mut store = PictureStore::default();
        store.insert_bytes(&ctx, "http://x/broken.jpg", b"junk");
        assert!(matches!(store.get("http://x/broken.jpg"), Some(Picture::Broken)));
    }

    #[test]
    fn test_insert_valid_bytes_ready() {
        let ctx = egui::Context::default();
        let mut store = PictureStore::default();
        store.insert_bytes(&ctx, PREVIEW_KEY, &png_bytes(2, 2));
        assert!(matches!(store.get(PREVIEW_KEY), Some(Picture::Ready(_))));
    }

    #[test]
    fn test_clear_broken_keeps_the_rest() {
        let ctx = egui::Context::default();
        let mut store = PictureStore::default();
        store.insert_bytes(&ctx, "ok", &png_bytes(1, 1));
        store.mark_loading("pending");
        store.mark_broken("bad");

        store.clear_broken();

        assert!(store.contains("ok"));
        assert!(store.contains("pending"));
        assert!(!store.contains("bad"));
        assert!(store.has_loading());
    }
}
