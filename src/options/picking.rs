use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Pick query parameters.
pub struct PickingOptions {
    /// Minimum half size of a pick region, in pixels. A click becomes a
    /// square of twice this edge length.
    #[schemars(title = "Tolerance (px)", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub tolerance_px: f32,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self { tolerance_px: 3.0 }
    }
}
