use gallery_core::config::{FractalConfig, KaleidoscopeConfig, TerrainConfig, ViewportConfig};
use gallery_core::kaleidoscope::KaleidoscopeEngine;
use gallery_core::noise::terrain::{sample_heights, TerrainShade};
use gallery_core::noise::{generate, SharedNoiseGrid};
use gallery_core::{Color, ColorRamp, ConfigurationError, FractalEngine, ViewportController};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-wasm loaded");
}

/// Map a client-space pointer position to the fractal view's input range.
///
/// x is flipped so dragging right pans the plane left under the cursor.
fn normalize_pointer(client_x: f64, client_y: f64, element_width: f64, element_height: f64) -> DVec2 {
    DVec2::new(
        -client_x / element_width.max(1.0),
        client_y / element_height.max(1.0),
    )
}

fn to_js(e: ConfigurationError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn ramp_from_js(data: &[f32]) -> Result<ColorRamp, JsValue> {
    ColorRamp::from_rgba_slice(data).map_err(|e| {
        log::warn!("rejected color list: {}", e);
        to_js(e)
    })
}

fn color_buffer_ptr(buffer: &[Color]) -> *const f32 {
    bytemuck::cast_slice::<Color, f32>(buffer).as_ptr()
}

fn color_buffer_byte_length(buffer: &[Color]) -> usize {
    std::mem::size_of_val(buffer)
}

/// Pan/zoom Mandelbrot view rendering into an RGBA f32 buffer.
#[wasm_bindgen]
pub struct MandelbrotView {
    controller: ViewportController,
    engine: FractalEngine,
    ramp: ColorRamp,
    width: usize,
    height: usize,
    buffer: Vec<Color>,
}

#[wasm_bindgen]
impl MandelbrotView {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<MandelbrotView, JsValue> {
        log::info!("MandelbrotView created: {}x{}", width, height);
        Ok(MandelbrotView {
            controller: ViewportController::new(&ViewportConfig::default()).map_err(to_js)?,
            engine: FractalEngine::from_config(&FractalConfig::default()).map_err(to_js)?,
            ramp: ColorRamp::mandelbrot_default(),
            width,
            height,
            buffer: vec![Color::BLACK; width * height],
        })
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.buffer.resize(width * height, Color::BLACK);
    }

    /// Render one frame; returns elapsed milliseconds.
    #[wasm_bindgen]
    pub fn render(&mut self) -> f32 {
        let start = js_sys::Date::now();
        let view = self.controller.snapshot();
        self.engine
            .render_frame(self.width, self.height, &view, &self.ramp, &mut self.buffer);
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn set_colors(&mut self, rgba: &[f32]) -> Result<(), JsValue> {
        self.ramp = ramp_from_js(rgba)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), JsValue> {
        self.engine.set_max_iterations(max_iterations).map_err(to_js)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, element_width: f64, element_height: f64) {
        self.controller
            .on_pointer_down(normalize_pointer(client_x, client_y, element_width, element_height));
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, element_width: f64, element_height: f64) {
        self.controller
            .on_pointer_move(normalize_pointer(client_x, client_y, element_width, element_height));
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.controller.on_pointer_up();
    }

    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.controller.on_pointer_leave();
    }

    #[wasm_bindgen]
    pub fn wheel(&mut self, delta_y: f64) {
        self.controller.on_wheel(delta_y);
    }

    #[wasm_bindgen]
    pub fn offset_x(&self) -> f64 {
        self.controller.preview_offset().x
    }

    #[wasm_bindgen]
    pub fn offset_y(&self) -> f64 {
        self.controller.preview_offset().y
    }

    #[wasm_bindgen]
    pub fn zoom(&self) -> f64 {
        self.controller.zoom()
    }

    #[wasm_bindgen]
    pub fn get_buffer_ptr(&self) -> *const f32 {
        color_buffer_ptr(&self.buffer)
    }

    #[wasm_bindgen]
    pub fn get_buffer_byte_length(&self) -> usize {
        color_buffer_byte_length(&self.buffer)
    }
}

/// Gradient-noise terrain: gradient texture, per-vertex heights and colors.
#[wasm_bindgen]
pub struct TerrainView {
    grid: SharedNoiseGrid,
    rng: StdRng,
    config: TerrainConfig,
    shade: TerrainShade,
    columns: usize,
    rows: usize,
    heights: Vec<f32>,
    colors: Vec<Color>,
}

#[wasm_bindgen]
impl TerrainView {
    /// `columns x rows` is the vertex lattice heights are sampled on.
    #[wasm_bindgen(constructor)]
    pub fn new(columns: usize, rows: usize, seed: Option<u64>) -> Result<TerrainView, JsValue> {
        let config = TerrainConfig::default();
        config.validate().map_err(to_js)?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = generate(config.grid_width, config.grid_height, &mut rng).map_err(to_js)?;
        log::info!(
            "TerrainView created: {}x{} gradients, {}x{} vertices",
            grid.width(),
            grid.height(),
            columns,
            rows
        );

        let mut view = TerrainView {
            grid: SharedNoiseGrid::new(grid),
            rng,
            shade: TerrainShade {
                steepness: config.shade_steepness,
                ..TerrainShade::default()
            },
            config,
            columns,
            rows,
            heights: Vec::new(),
            colors: Vec::new(),
        };
        view.resample();
        Ok(view)
    }

    /// Replace the gradient grid with a fresh one of the configured size.
    #[wasm_bindgen]
    pub fn regenerate(&mut self) -> Result<(), JsValue> {
        self.grid
            .regenerate(self.config.grid_width, self.config.grid_height, &mut self.rng)
            .map_err(to_js)?;
        self.resample();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_grid_density(&mut self, width: usize, height: usize) -> Result<(), JsValue> {
        let config = TerrainConfig {
            grid_width: width,
            grid_height: height,
            ..self.config.clone()
        };
        config.validate().map_err(to_js)?;
        self.config = config;
        self.regenerate()
    }

    /// Vertex displacement scale the host should apply along normals.
    #[wasm_bindgen]
    pub fn displacement(&self) -> f32 {
        self.config.displacement
    }

    #[wasm_bindgen]
    pub fn grid_width(&self) -> usize {
        self.grid.load().width()
    }

    #[wasm_bindgen]
    pub fn grid_height(&self) -> usize {
        self.grid.load().height()
    }

    /// Row-major `(x, y)` gradient pairs for a two-channel float texture.
    #[wasm_bindgen]
    pub fn gradient_texture(&self) -> Vec<f32> {
        self.grid.load().texture_data().to_vec()
    }

    #[wasm_bindgen]
    pub fn get_heights_ptr(&self) -> *const f32 {
        self.heights.as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_heights_len(&self) -> usize {
        self.heights.len()
    }

    #[wasm_bindgen]
    pub fn get_colors_ptr(&self) -> *const f32 {
        color_buffer_ptr(&self.colors)
    }

    #[wasm_bindgen]
    pub fn get_colors_byte_length(&self) -> usize {
        color_buffer_byte_length(&self.colors)
    }
}

impl TerrainView {
    fn resample(&mut self) {
        let grid = self.grid.load();
        self.heights = sample_heights(&grid, self.columns, self.rows);
        self.colors = self.heights.iter().map(|&h| self.shade.shade(h)).collect();
    }
}

/// Animated star rings cycling through a color list.
#[wasm_bindgen]
pub struct KaleidoscopeView {
    engine: KaleidoscopeEngine,
    ramp: ColorRamp,
    width: usize,
    height: usize,
    buffer: Vec<Color>,
}

#[wasm_bindgen]
impl KaleidoscopeView {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<KaleidoscopeView, JsValue> {
        log::info!("KaleidoscopeView created: {}x{}", width, height);
        Ok(KaleidoscopeView {
            engine: KaleidoscopeEngine::new(KaleidoscopeConfig::default()).map_err(to_js)?,
            ramp: ColorRamp::kaleidoscope_default(),
            width,
            height,
            buffer: vec![Color::BLACK; width * height],
        })
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.buffer.resize(width * height, Color::BLACK);
    }

    /// Render the frame at `time` seconds; returns elapsed milliseconds.
    #[wasm_bindgen]
    pub fn render(&mut self, time: f32) -> f32 {
        let start = js_sys::Date::now();
        self.engine
            .render_frame(self.width, self.height, time, &self.ramp, &mut self.buffer);
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn set_wave_speed(&mut self, wave_speed: f32) {
        self.engine.set_wave_speed(wave_speed);
    }

    #[wasm_bindgen]
    pub fn set_star_size(&mut self, star_size: f32) {
        self.engine.set_star_size(star_size);
    }

    #[wasm_bindgen]
    pub fn set_colors(&mut self, rgba: &[f32]) -> Result<(), JsValue> {
        self.ramp = ramp_from_js(rgba)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn get_buffer_ptr(&self) -> *const f32 {
        color_buffer_ptr(&self.buffer)
    }

    #[wasm_bindgen]
    pub fn get_buffer_byte_length(&self) -> usize {
        color_buffer_byte_length(&self.buffer)
    }
}
