#[derive(Clone, Copy)]
pub struct Spring {
	pub rest_length: f32,
	pub stiffness: f32,
	// index into the owning body's node list
	pub target: usize,
}

impl Spring {
	pub fn new(rest_length: f32, stiffness: f32, target: usize) -> Self {
		Self {
			rest_length,
			stiffness,
			target,
		}
	}
}
