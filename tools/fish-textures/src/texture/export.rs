//! PNG export for texture buffers

use super::TextureBuffer;
use crate::error::FishTextureError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a TextureBuffer to a PNG file
///
/// # Example
/// ```no_run
/// use fish_textures::texture::{write_png, TextureBuffer};
/// use std::path::Path;
///
/// let tex = TextureBuffer::filled(64, 64, [255, 0, 0, 255]);
/// write_png(&tex, Path::new("red.png")).unwrap();
/// ```
pub fn write_png(texture: &TextureBuffer, path: &Path) -> Result<(), FishTextureError> {
    let file = File::create(path).map_err(|source| FishTextureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    encode_into(texture, BufWriter::new(file))
}

/// Encode a TextureBuffer as PNG bytes
pub fn encode_png(texture: &TextureBuffer) -> Result<Vec<u8>, FishTextureError> {
    let mut bytes = Vec::new();
    encode_into(texture, &mut bytes)?;
    Ok(bytes)
}

fn encode_into<W: Write>(texture: &TextureBuffer, w: W) -> Result<(), FishTextureError> {
    let mut encoder = png::Encoder::new(w, texture.width, texture.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&texture.pixels)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let tex = TextureBuffer::filled(16, 8, [10, 20, 30, 255]);
        let bytes = encode_png(&tex).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let tex = TextureBuffer::filled(32, 32, [255, 255, 255, 255]);

        write_png(&tex, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_write_png_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let tex = TextureBuffer::new(4, 4);
        assert!(matches!(
            write_png(&tex, &path),
            Err(FishTextureError::Io { .. })
        ));
    }
}
