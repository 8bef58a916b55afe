use std::num::NonZeroU32;
use std::time::Instant;

use fractal_chunks::{
    render_fractal, write_ppm, Complex, ComplexRect, PixelRect, Point, RenderConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width: u32 = 800;
    let height: u32 = 600;
    let chunk_size = NonZeroU32::new(256).ok_or("chunk size must be non-zero")?;
    let filepath = "output/mandelbrot.ppm";

    let config = RenderConfig::new(256, 0.2, 0.5, 1.0)?;
    let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: width, y: height })?;

    // Classic Mandelbrot view
    let region = ComplexRect::new(
        Complex { real: -2.5, imag: -1.0 },
        Complex { real: 1.0, imag: 1.0 },
    )?;

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", width, height);
    println!("Max iterations: {}", config.iterations);
    println!("Chunk size: {}", chunk_size);

    let start = Instant::now();
    let image = render_fractal(&config, pixel_rect, region, chunk_size)?;
    println!("Duration:   {:?}", start.elapsed());

    std::fs::create_dir_all("output")?;
    write_ppm(&image, filepath)?;
    println!("Saved to {}", filepath);

    Ok(())
}
