use image::{imageops::FilterType, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ThumbnailError;
use crate::state::data::ProjectId;

/// Size of generated thumbnails (bounding box, aspect ratio kept)
const THUMBNAIL_SIZE: u32 = 512;

/// Get the thumbnail cache directory
/// Returns ~/.cache/portfolio-studio/thumbnails on Linux
pub fn get_thumbnail_cache_dir() -> Option<PathBuf> {
    let mut path = dirs::cache_dir().or_else(dirs::home_dir)?;

    path.push("portfolio-studio");
    path.push("thumbnails");
    Some(path)
}

/// Get the thumbnail path for a project (doesn't generate, just returns the expected path)
pub fn get_thumbnail_path(cache_dir: &Path, id: ProjectId) -> PathBuf {
    cache_dir.join(format!("{}.jpg", id))
}

/// Return a cached thumbnail, fetching and generating it on a miss.
///
/// Fetch and decode failures are returned to the caller, which shows a
/// placeholder; they never reach the user as errors.
pub async fn load_thumbnail(
    client: reqwest::Client,
    cache_dir: PathBuf,
    id: ProjectId,
    url: String,
) -> Result<PathBuf, ThumbnailError> {
    let thumbnail_path = get_thumbnail_path(&cache_dir, id);
    if tokio::fs::try_exists(&thumbnail_path).await.unwrap_or(false) {
        let cached = thumbnail_path.clone();
        if tokio::task::spawn_blocking(move || is_readable(&cached)).await? {
            return Ok(thumbnail_path);
        }
        tracing::debug!("Discarding unreadable thumbnail: {}", thumbnail_path.display());
        tokio::fs::remove_file(&thumbnail_path).await?;
    }

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(ThumbnailError::Status(response.status().as_u16()));
    }
    let bytes = response.bytes().await?;

    // Decoding and resizing are CPU-bound
    let path = tokio::task::spawn_blocking(move || {
        save_thumbnail(&bytes, &cache_dir, id)
    })
    .await??;

    tracing::debug!("📸 Generated thumbnail: {}", path.display());
    Ok(path)
}

/// Decode image bytes, downscale and write them into the cache
pub fn save_thumbnail(data: &[u8], cache_dir: &Path, id: ProjectId) -> Result<PathBuf, ThumbnailError> {
    let img = match image::guess_format(data) {
        Ok(format) => image::load_from_memory_with_format(data, format)?,
        Err(_) => image::load_from_memory_with_format(data, ImageFormat::Jpeg)?,
    };

    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    fs::create_dir_all(cache_dir)?;
    let thumbnail_path = get_thumbnail_path(cache_dir, id);

    // Write beside the final name, then rename into place
    let partial_path = thumbnail_path.with_extension("jpg.part");

    // JPEG has no alpha channel
    if let Err(err) = thumbnail.to_rgb8().save_with_format(&partial_path, ImageFormat::Jpeg) {
        let _ = fs::remove_file(&partial_path);
        return Err(err.into());
    }
    fs::rename(&partial_path, &thumbnail_path)?;

    Ok(thumbnail_path)
}

/// Whether a cached file still decodes as an image
fn is_readable(path: &Path) -> bool {
    image::open(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(width, height, Rgba([108u8, 99, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_save_thumbnail_downscales_into_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_thumbnail(&png_bytes(1600, 1200), dir.path(), 4).unwrap();

        assert_eq!(path, dir.path().join("4.jpg"));
        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!(width, THUMBNAIL_SIZE);
        assert!(height < THUMBNAIL_SIZE);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_thumbnail(b"not an image", dir.path(), 1).unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode(_)));
        assert!(!get_thumbnail_path(dir.path(), 1).exists());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let cached = save_thumbnail(&png_bytes(64, 64), dir.path(), 9).unwrap();

        // The URL is unreachable; a hit must not touch it
        let path = load_thumbnail(
            reqwest::Client::new(),
            dir.path().to_path_buf(),
            9,
            String::from("http://127.0.0.1:9/unreachable.jpg"),
        )
        .await
        .unwrap();
        assert_eq!(path, cached);
    }

    #[test]
    fn test_save_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        save_thumbnail(&png_bytes(64, 64), dir.path(), 2).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("2.jpg")]);
    }

    #[tokio::test]
    async fn test_truncated_cache_entry_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let cached = get_thumbnail_path(dir.path(), 3);
        fs::write(&cached, b"\xFF\xD8truncated").unwrap();

        // The bad entry is dropped and the fetch is attempted
        let err = load_thumbnail(
            reqwest::Client::new(),
            dir.path().to_path_buf(),
            3,
            String::from("http://127.0.0.1:9/unreachable.jpg"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ThumbnailError::Fetch(_)));
        assert!(!cached.exists());
    }
}
