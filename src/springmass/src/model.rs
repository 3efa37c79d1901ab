use nalgebra::Rotation2;

use crate::node::Node;
use crate::softbody::Softbody;
use crate::spring::Spring;
use crate::V2;

// node/spring layout around the origin, offset into place by the scene
#[derive(Clone)]
pub struct BodyModel {
	pub nodes: Vec<Node>,
	pub color: [f32; 3],
}

impl BodyModel {
	// n nodes on a square perimeter, counter-clockwise, fully connected
	// springs resting at their construction length
	pub fn new_square(
		n: usize,
		size: f32,
		mass: f32,
		stiffness: f32,
		damping: f32,
		rotation: f32,
		color: [f32; 3],
	) -> Self {
		let rot = Rotation2::new(rotation);
		let half = size / 2f32;
		let mut positions = Vec::with_capacity(n);
		for idx in 0..n {
			let t = idx as f32 / n as f32 * 4f32;
			let f = t.fract();
			let p = match t.floor() as usize % 4 {
				0 => V2::new(-half + size * f, -half),
				1 => V2::new(half, -half + size * f),
				2 => V2::new(half - size * f, half),
				_ => V2::new(-half, half - size * f),
			};
			positions.push(rot * p);
		}
		let mut nodes = Vec::with_capacity(n);
		for idx in 0..n {
			let mut springs = Vec::with_capacity(n - 1);
			for target in 0..n {
				if target == idx {
					continue;
				}
				let rest = (positions[idx] - positions[target]).magnitude();
				springs.push(Spring::new(rest, stiffness, target));
			}
			nodes.push(
				Node::new(positions[idx], mass, damping).with_springs(springs),
			);
		}
		Self { nodes, color }
	}

	pub fn build(self) -> Softbody {
		Softbody::new(self.nodes, self.color)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_square_layout() {
		let model = BodyModel::new_square(4, 100., 1., 0.02, 0., 0., [1.; 3]);
		assert_eq!(model.nodes.len(), 4);
		for node in model.nodes.iter() {
			assert_eq!(node.springs.len(), 3);
			assert!((node.pos[0].abs() - 50.).abs() < 1e-6);
			assert!((node.pos[1].abs() - 50.).abs() < 1e-6);
		}
	}

	#[test]
	fn test_square_rotation_preserves_shape() {
		let model =
			BodyModel::new_square(8, 100., 1., 0.02, 0., 0.7, [1.; 3]);
		for node in model.nodes.iter() {
			for spring in node.springs.iter() {
				let l = (node.pos - model.nodes[spring.target].pos)
					.magnitude();
				assert!((l - spring.rest_length).abs() < 1e-4);
			}
		}
	}
}
