use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;

    let mut bytes = Vec::with_capacity(buffer.buffer().len() * 3);
    for index in 0..buffer.buffer().len() {
        let colour = buffer.colour_at(index);
        bytes.push(colour.red());
        bytes.push(colour.green());
        bytes.push(colour.blue());
    }
    file.write_all(&bytes)?;

    Ok(())
}
