//! Browser binding for the scene controller.
//!
//! The JS host owns the three.js camera, orbit controls and scene group. Each
//! frame it pushes the live camera pose (the user may have orbited), calls
//! [`WebSceneController::tick`], then copies the camera and group state back
//! onto its objects.

use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::camera::CameraPose;
use crate::controller::SceneController;
use crate::host::Viewport;
use crate::options::Options;
use crate::scene::{Layout, NodePositions, SceneTransform};

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("photocloud navigation core loaded");
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// [`SceneController`] plus the mirror of the host's camera and group.
#[wasm_bindgen]
pub struct WebSceneController {
    controller: SceneController,
    viewport: Viewport,
    nodes: NodePositions,
}

#[wasm_bindgen]
impl WebSceneController {
    /// Controller configured from an options TOML string (empty for
    /// defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: &str) -> Result<WebSceneController, JsValue> {
        let options = Options::from_toml(options_toml).map_err(js_error)?;
        let viewport = Viewport::new(options.camera.default_pose());
        Ok(Self {
            controller: SceneController::with_options(options),
            viewport,
            nodes: NodePositions::default(),
        })
    }

    /// Replace the node positions from a JSON object of id → `[x, y(, z)]`.
    #[wasm_bindgen(js_name = setNodes)]
    pub fn set_nodes(&mut self, json: &str) -> Result<(), JsValue> {
        self.nodes = serde_json::from_str(json).map_err(js_error)?;
        Ok(())
    }

    /// Mirror the live camera pose from the host.
    #[wasm_bindgen(js_name = syncCamera)]
    pub fn sync_camera(
        &mut self,
        position: &[f32],
        target: &[f32],
    ) -> Result<(), JsValue> {
        let (Ok(position), Ok(target)) =
            (<[f32; 3]>::try_from(position), <[f32; 3]>::try_from(target))
        else {
            return Err(JsValue::from_str("camera vectors need 3 components"));
        };
        self.viewport.camera = Some(CameraPose::new(
            Vec3::from_array(position),
            Vec3::from_array(target),
        ));
        Ok(())
    }

    /// Mirror the live scene-group transform from the host.
    #[wasm_bindgen(js_name = syncGroup)]
    pub fn sync_group(
        &mut self,
        position: &[f32],
        rotation: &[f32],
    ) -> Result<(), JsValue> {
        let (Ok(position), Ok(rotation)) =
            (<[f32; 3]>::try_from(position), <[f32; 3]>::try_from(rotation))
        else {
            return Err(JsValue::from_str("group vectors need 3 components"));
        };
        self.viewport.group = Some(SceneTransform::new(
            Vec3::from_array(position),
            Vec3::from_array(rotation),
        ));
        Ok(())
    }

    /// Selection changed; `None` clears it.
    pub fn select(&mut self, node: Option<String>) {
        let _ = self.controller.on_selection_change(
            &mut self.viewport,
            node.as_deref(),
            Some(&self.nodes),
        );
    }

    /// Switch to the layout named `layout`.
    #[wasm_bindgen(js_name = setLayout)]
    pub fn set_layout(&mut self, layout: &str) -> Result<(), JsValue> {
        let layout: Layout = layout.parse().map_err(js_error)?;
        self.controller.on_layout_change(&mut self.viewport, layout);
        Ok(())
    }

    /// Go-back trigger; returns whether the camera started moving.
    #[wasm_bindgen(js_name = goBack)]
    pub fn go_back(&mut self, token: u32) -> bool {
        self.controller.on_go_back(&mut self.viewport, u64::from(token))
    }

    /// Forget every saved camera pose.
    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) {
        self.controller.clear_history();
    }

    /// Orbit-controls interaction began.
    #[wasm_bindgen(js_name = interactionStart)]
    pub fn interaction_start(&mut self) {
        self.controller.on_interaction_start();
    }

    /// Orbit-controls interaction ended.
    #[wasm_bindgen(js_name = interactionEnd)]
    pub fn interaction_end(&mut self) {
        self.controller.on_interaction_end();
    }

    /// Advance one frame.
    pub fn tick(&mut self, delta: f32) {
        self.controller.tick(&mut self.viewport, delta);
    }

    /// Camera eye position as `[x, y, z]`.
    #[wasm_bindgen(js_name = cameraPosition)]
    pub fn camera_position(&self) -> Vec<f32> {
        self.viewport
            .camera
            .map(|c| c.position.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Camera look-at target as `[x, y, z]`.
    #[wasm_bindgen(js_name = cameraTarget)]
    pub fn camera_target(&self) -> Vec<f32> {
        self.viewport
            .camera
            .map(|c| c.target.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Scene-group translation as `[x, y, z]`.
    #[wasm_bindgen(js_name = groupPosition)]
    pub fn group_position(&self) -> Vec<f32> {
        self.viewport
            .group
            .map(|g| g.position.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Scene-group Euler rotation as `[x, y, z]`.
    #[wasm_bindgen(js_name = groupRotation)]
    pub fn group_rotation(&self) -> Vec<f32> {
        self.viewport
            .group
            .map(|g| g.rotation.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Whether "go back" would move the camera.
    #[wasm_bindgen(js_name = canGoBack)]
    pub fn can_go_back(&self) -> bool {
        self.controller.can_go_back()
    }

    /// Notices since the last call, as a JSON array.
    #[wasm_bindgen(js_name = drainNotices)]
    pub fn drain_notices(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.drain_notices()).map_err(js_error)
    }

    /// Cancel the idle timer before the host unmounts.
    pub fn cleanup(&mut self) {
        self.controller.cleanup();
    }
}
