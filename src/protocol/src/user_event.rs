use serde::{Deserialize, Serialize};

// pointer sample, refreshed once per tick by the frontend
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Pointer {
	pub pos: [f32; 2],
	pub pressed: bool,
}
