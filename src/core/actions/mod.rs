pub mod render_fractal;
