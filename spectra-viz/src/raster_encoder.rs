use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::debug;
use spectra_dsp::SpectrogramMatrix;

use crate::error::{Result, VizError};
use crate::palette::Palette;
use crate::palette_quantizer::quantize;
use crate::raster::RasterImage;

pub const IMAGE_EXTENSION: &str = "png";

/// Appends `.png` unless the name already ends with it.
pub fn with_image_extension<P: AsRef<Path>>(filename: P) -> PathBuf {
    let filename = filename.as_ref();
    if filename.extension().is_some_and(|ext| ext == IMAGE_EXTENSION) {
        return filename.to_path_buf();
    }
    let mut name = filename.as_os_str().to_owned();
    name.push(".");
    name.push(IMAGE_EXTENSION);
    PathBuf::from(name)
}

/// Quantises and lays out a normalised spectrogram without writing it.
pub fn render_image(matrix: &SpectrogramMatrix, palette: &Palette) -> Result<RasterImage> {
    if matrix.is_empty() {
        return Err(VizError::EmptyImage {
            frames: matrix.frames(),
            bins: matrix.bins(),
        });
    }
    if u32::try_from(matrix.frames()).is_err() || u32::try_from(matrix.bins()).is_err() {
        return Err(VizError::ImageTooLarge {
            frames: matrix.frames(),
            bins: matrix.bins(),
        });
    }
    let quantized = quantize(matrix, palette)?;
    RasterImage::from_quantized(&quantized, palette)
}

/// Writes an 8-bit RGB PNG.
pub fn write_png<P: AsRef<Path>>(path: P, image: &RasterImage) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.data())?;
    writer.finish()?;
    Ok(())
}

/// Saves a normalised `[frame][bin]` spectrogram as a PNG image.
///
/// Time runs left to right and frequency bottom to top. Returns the path
/// actually written, with the `.png` extension appended if it was missing.
pub fn save_spectrogram<P: AsRef<Path>>(
    filename: P,
    matrix: &SpectrogramMatrix,
    palette: &Palette,
) -> Result<PathBuf> {
    let path = with_image_extension(filename);
    let image = render_image(matrix, palette)?;
    debug!(
        "Saving {}x{} spectrogram image ({} colours) to {}",
        image.width(),
        image.height(),
        palette.len(),
        path.display()
    );
    write_png(&path, &image)?;
    Ok(path)
}
