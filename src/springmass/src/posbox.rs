use crate::V2;

#[derive(Clone, Copy)]
pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Posbox {
	pub fn new(width: f32, height: f32) -> Self {
		Self {
			xmin: 0f32,
			xmax: width,
			ymin: 0f32,
			ymax: height,
		}
	}

	// per-axis check, callers reflect momentum before clamping
	pub fn outside(&self, pos: &V2) -> [bool; 2] {
		[
			pos[0] < self.xmin || pos[0] > self.xmax,
			pos[1] < self.ymin || pos[1] > self.ymax,
		]
	}

	pub fn clamp(&self, pos: &mut V2) {
		if pos[0] < self.xmin {
			pos[0] = self.xmin;
		} else if pos[0] > self.xmax {
			pos[0] = self.xmax;
		};
		if pos[1] < self.ymin {
			pos[1] = self.ymin;
		} else if pos[1] > self.ymax {
			pos[1] = self.ymax;
		};
	}
}
