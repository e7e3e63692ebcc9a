//! # tunerdash-adapter-web
//!
//! Drives the dashboard page in the browser.
//!
//! The page's WebSocket handler passes every received frame to
//! [`update_dashboard`]; the model radio buttons call
//! [`update_tuner_visibility_for_model`] when the user switches models.
//! How frames are received stays with the page.
//!
//! ## Dependency rule
//!
//! Depends on `tunerdash-app` (port traits) and `tunerdash-domain` only.

mod dom;
mod locator;

use wasm_bindgen::prelude::*;

use tunerdash_app::services::view_synchronizer::ViewSynchronizer;
use tunerdash_domain::derive::civ::CivModel;
use tunerdash_domain::scalar::Scalar;
use tunerdash_domain::snapshot::TelemetrySnapshot;

pub use dom::{DomNode, DomPage};
pub use locator::{Locator, locate};

fn current_page() -> Result<DomPage, JsValue> {
    DomPage::from_window().ok_or_else(|| JsValue::from_str("no document to update"))
}

/// Apply one raw telemetry frame to the dashboard.
///
/// # Errors
///
/// Rejects with a message when the frame is not a JSON object or when there
/// is no document. Missing page elements are not an error.
#[wasm_bindgen(js_name = updateDashboard)]
pub fn update_dashboard(frame: &str) -> Result<(), JsValue> {
    let snapshot =
        TelemetrySnapshot::from_json(frame).map_err(|err| JsValue::from_str(&err.to_string()))?;
    ViewSynchronizer::new(current_page()?).apply(&snapshot);
    Ok(())
}

/// Apply the visibility policy of `model` without waiting for the next frame.
///
/// # Errors
///
/// Rejects when there is no document.
#[wasm_bindgen(js_name = updateTunerVisibilityForModel)]
pub fn update_tuner_visibility_for_model(model: &str) -> Result<(), JsValue> {
    let model = CivModel::from_scalar(&Scalar::Text(model.to_string()));
    ViewSynchronizer::new(current_page()?).apply_model(&model);
    Ok(())
}
