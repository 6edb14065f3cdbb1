//! PNG conversion between pixel buffers and symbol grids
//!
//! The solver treats RGBA quadruples as opaque symbols; these helpers are the
//! only place pixel content is interpreted. Loading flattens each pixel to a
//! `[u8; 4]` symbol, export writes symbols back out with an integer upscale
//! so small grids stay viewable.

use crate::io::error::{Result, SolverError};
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

/// Load a PNG file as a dense grid of RGBA symbols
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not a valid image
/// format, or decodes to zero pixels.
pub fn load_png_as_symbols<P: AsRef<Path>>(path: P) -> Result<Array2<[u8; 4]>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SolverError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;
    let rgba_img = img.to_rgba8();

    let (width, height) = (rgba_img.width() as usize, rgba_img.height() as usize);
    if width == 0 || height == 0 {
        return Err(SolverError::InvalidSourceData {
            reason: format!("image '{}' has no pixels", path_buf.display()),
        });
    }

    let mut symbols = Array2::from_elem((height, width), [0u8; 4]);
    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        if let Some(symbol) = symbols.get_mut((y as usize, x as usize)) {
            *symbol = pixel.0;
        }
    }

    Ok(symbols)
}

/// Export a symbol grid as a PNG image
///
/// Each cell becomes a `scale` x `scale` pixel block. A scale of zero is
/// treated as one.
///
/// # Errors
///
/// Returns an error if:
/// - The symbol grid is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_symbols_as_png(
    symbols: &Array2<[u8; 4]>,
    scale: u32,
    output_path: &str,
) -> Result<()> {
    if symbols.is_empty() {
        return Err(SolverError::InvalidSourceData {
            reason: "symbol grid has no cells".to_string(),
        });
    }

    let scale = scale.max(1);
    let (rows, cols) = symbols.dim();
    let mut img = ImageBuffer::new(cols as u32 * scale, rows as u32 * scale);

    for ((row, col), &symbol) in symbols.indexed_iter() {
        let base_x = col as u32 * scale;
        let base_y = row as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(base_x + dx, base_y + dy, Rgba(symbol));
            }
        }
    }

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
