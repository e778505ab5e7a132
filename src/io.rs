//! Decoding and encoding image files.

use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, RgbImage};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

fn invalid_image(path: &Path, source: ImageError) -> Error {
    Error::InvalidImage {
        path: path.to_path_buf(),
        source,
    }
}

/// Decode `path` into 8-bit RGB. Any alpha channel is dropped.
///
/// The format is sniffed from the file contents, so the extension may be
/// missing or wrong.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| invalid_image(path, ImageError::IoError(e)))?;
    let img = reader.decode().map_err(|e| invalid_image(path, e))?.to_rgb8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded");
    Ok(img)
}

fn write_failure(path: &Path, source: ImageError) -> Error {
    Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

/// Encode `img` to `path`, in the format its extension names.
///
/// The image is written to a temporary file next to `path` and renamed
/// into place once complete, so a failed write never leaves a truncated
/// file behind.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|e| write_failure(path, e))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| write_failure(path, ImageError::IoError(e)))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        img.write_to(&mut writer, format).map_err(|e| write_failure(path, e))?;
        writer.flush().map_err(|e| write_failure(path, ImageError::IoError(e)))?;
    }
    set_output_permissions(&tmp, path)
        .map_err(|e| write_failure(path, ImageError::IoError(e)))?;
    tmp.persist(path)
        .map_err(|e| write_failure(path, ImageError::IoError(e.error)))?;

    debug!(path = %path.display(), ?format, "saved");
    Ok(())
}

// Temp files are created owner-only. Give the output the mode of the file
// it replaces, or the usual 0644 for a new file.
#[cfg(unix)]
fn set_output_permissions(tmp: &NamedTempFile, target: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = match std::fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => std::fs::Permissions::from_mode(0o644),
    };
    tmp.as_file().set_permissions(perms)
}

#[cfg(not(unix))]
fn set_output_permissions(_tmp: &NamedTempFile, _target: &Path) -> std::io::Result<()> {
    Ok(())
}
