use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};

use crate::error::DeckError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, DeckError> {
    let io_error = |source: std::io::Error| DeckError::Io { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(DeckError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn extension(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// What the EXIF block tells us about a slide image.
#[derive(Debug, PartialEq)]
pub struct ExifInfo {
    /// 1 = Top-left (Normal), 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    pub orientation: u16,
    pub description: Option<String>,
}

// Only JPEG carries EXIF reliably; anything else reads as "normal, untitled".
pub fn read_exif(path: &Path, file_bytes: &[u8]) -> ExifInfo {
    let mut info = ExifInfo { orientation: 1, description: None };

    let extension = extension(path);
    if extension != "jpg" && extension != "jpeg" {
        return info;
    }

    let exif = match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!("no EXIF data for {}: {}", path.display(), e);
            return info;
        }
    };

    if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
        if let Value::Short(values) = &field.value {
            if let Some(&orientation) = values.first() {
                info.orientation = orientation;
            }
        }
    }

    if let Some(field) = exif.get_field(Tag::ImageDescription, In::PRIMARY) {
        if let Value::Ascii(values) = &field.value {
            info.description = values
                .first()
                .map(|raw| String::from_utf8_lossy(raw).trim().to_string())
                .filter(|text| !text.is_empty());
        }
    }

    info
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<(Texture2D, ExifInfo), DeckError> {
    let image_error = |reason: String| DeckError::Image { path: image_path.to_path_buf(), reason };

    let file_bytes = fs::read(image_path)
        .map_err(|source| DeckError::Io { path: image_path.to_path_buf(), source })?;

    let info = read_exif(image_path, &file_bytes);

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension(image_path)), &file_bytes)
        .map_err(|e| image_error(e.to_string()))?;

    // Flipped orientations (2, 4, 5, 7) are left as they are.
    match info.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if info.orientation != 1 {
        tracing::debug!(orientation = info.orientation, "rotated {}", image_path.display());
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| image_error(e.to_string()))?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok((texture, info))
}
