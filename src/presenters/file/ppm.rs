use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::data::pixel_grid::PixelGrid;

/// Writes `frame` as a binary PPM image.
pub fn write_ppm<W: Write>(writer: &mut W, frame: &PixelGrid) -> std::io::Result<()> {
    // P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", frame.width(), frame.height())?;
    writeln!(writer, "255")?;
    writer.write_all(frame.buffer())?;

    Ok(())
}

/// Saves every presented frame as `<directory>/<prefix>_<index>.ppm`.
pub struct PpmFilePresenter {
    directory: PathBuf,
    prefix: String,
}

impl PpmFilePresenter {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn frame_path(&self, frame_index: u64) -> PathBuf {
        self.directory
            .join(format!("{}_{:05}.ppm", self.prefix, frame_index))
    }
}

impl FrameSink for PpmFilePresenter {
    fn present(&mut self, frame: &PixelGrid, frame_index: u64) -> std::io::Result<()> {
        let path = self.frame_path(frame_index);
        let mut writer = BufWriter::new(File::create(&path)?);

        write_ppm(&mut writer, frame)?;
        writer.flush()?;

        debug!("wrote {}", path.display());

        Ok(())
    }
}
