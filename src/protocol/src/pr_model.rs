// pr_model: per-tick body snapshot for rendering

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrNode {
	pub pos: [f32; 2],
	// debug vector drawing
	pub normal: [f32; 2],
	pub radius: f32,
}

// ring order is preserved so a renderer can close a spline
// through the node positions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrBody {
	pub nodes: Vec<PrNode>,
	pub color: [f32; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrScene {
	pub bodies: Vec<PrBody>,
}
