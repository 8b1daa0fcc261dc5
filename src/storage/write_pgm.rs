use std::io::Write;
use std::path::Path;

use crate::core::data::intensity_image::IntensityImage;

pub fn write_pgm(image: &IntensityImage, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(filepath)?;

    // PGM header: P5 means binary greyscale, then width height max_value
    writeln!(file, "P5")?;
    writeln!(file, "{} {}", image.width(), image.height())?;
    writeln!(file, "255")?;
    file.write_all(image.data())?;

    Ok(())
}
