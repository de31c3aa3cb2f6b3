use wasm_bindgen::prelude::*;

pub mod animation;
pub mod camera;
pub mod config;
pub mod curve;
pub mod error;
pub mod math;
pub mod mesh;
pub mod rig;

pub use error::TrackError;
pub use rig::Rig;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logger();
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

fn to_js(err: TrackError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Track mesh and rail camera exposed to JavaScript
#[wasm_bindgen]
pub struct TrackRig {
    rig: Rig,
}

#[wasm_bindgen]
impl TrackRig {
    /// Build a track from a YAML description
    #[wasm_bindgen(constructor)]
    pub fn new(yaml: &str) -> Result<TrackRig, JsValue> {
        let rig = Rig::from_yaml(yaml).map_err(to_js)?;
        Ok(Self { rig })
    }

    /// Replace the track; on error the current one is kept
    #[wasm_bindgen]
    pub fn rebuild(&mut self, yaml: &str) -> Result<(), JsValue> {
        self.rig = Rig::from_yaml(yaml).map_err(to_js)?;
        Ok(())
    }

    /// Advance the camera by `dt` seconds
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f64) {
        self.rig.update(dt);
    }

    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.rig.restart();
    }

    /// Vertex positions, xyz per vertex
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        let data = self.rig.buffers().map(|b| b.positions.as_slice()).unwrap_or(&[]);
        js_sys::Float32Array::from(data)
    }

    /// Vertex normals, xyz per vertex
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        let data = self.rig.buffers().map(|b| b.normals.as_slice()).unwrap_or(&[]);
        js_sys::Float32Array::from(data)
    }

    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        let data = self.rig.buffers().map(|b| b.indices.as_slice()).unwrap_or(&[]);
        js_sys::Uint32Array::from(data)
    }

    #[wasm_bindgen]
    pub fn camera_position(&self) -> Vec<f64> {
        self.rig.camera().position.to_array().to_vec()
    }

    /// Camera orientation as a quaternion (x, y, z, w)
    #[wasm_bindgen]
    pub fn camera_rotation(&self) -> Vec<f64> {
        self.rig.camera().rotation.to_array().to_vec()
    }

    /// Column-major world matrix of the camera
    #[wasm_bindgen]
    pub fn camera_matrix(&self) -> Vec<f64> {
        self.rig.camera().world_matrix().as_slice().to_vec()
    }

    #[wasm_bindgen]
    pub fn track_length(&self) -> f64 {
        self.rig.follow().total_length()
    }

    /// Normalized camera position along the track (0.0 to 1.0)
    #[wasm_bindgen]
    pub fn progress(&self) -> f64 {
        self.rig.follow().progress()
    }

    #[wasm_bindgen]
    pub fn is_finished(&self) -> bool {
        self.rig.follow().is_finished()
    }

    #[wasm_bindgen]
    pub fn triangle_count(&self) -> usize {
        self.rig.track().mesh.triangle_count()
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.rig.track().mesh.vertex_count()
    }
}

