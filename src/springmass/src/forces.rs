use std::sync::{Arc, RwLock};

use dyn_clone::DynClone;

use crate::softbody::Softbody;
use crate::V2;
use protocol::user_event::Pointer;

// per-tick external force, one call per body
pub trait ForceGenerator: DynClone + Send {
	fn force(&self, body: &Softbody, index: usize) -> V2;
}

dyn_clone::clone_trait_object!(ForceGenerator);

#[derive(Clone)]
pub struct Gravity {
	accel: V2,
}

impl Gravity {
	pub fn new(accel: V2) -> Self {
		Self { accel }
	}

	pub fn build(self) -> Box<dyn ForceGenerator> {
		Box::new(self)
	}
}

impl ForceGenerator for Gravity {
	fn force(&self, _body: &Softbody, _index: usize) -> V2 {
		self.accel
	}
}

#[derive(Clone)]
pub struct PointerForce {
	strength: f32,
	pointer: Arc<RwLock<Pointer>>,
}

impl PointerForce {
	pub fn new(pointer: Arc<RwLock<Pointer>>) -> Self {
		Self {
			strength: 1f32,
			pointer,
		}
	}

	pub fn with_strength(mut self, strength: f32) -> Self {
		self.strength = strength;
		self
	}

	pub fn build(self) -> Box<dyn ForceGenerator> {
		Box::new(self)
	}
}

impl ForceGenerator for PointerForce {
	// reads the centroid left by the body's previous tick
	fn force(&self, body: &Softbody, _index: usize) -> V2 {
		let pointer = self.pointer.read().unwrap();
		if !pointer.pressed {
			return V2::zeros();
		}
		let dp = V2::new(pointer.pos[0], pointer.pos[1]) - body.centroid;
		let l = dp.magnitude();
		if !l.is_normal() {
			return V2::zeros();
		}
		dp * (self.strength / l)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::node::Node;

	#[test]
	fn test_pointer_released_is_neutral() {
		let pointer = Arc::new(RwLock::new(Pointer::default()));
		let generator = PointerForce::new(pointer.clone()).with_strength(3.);
		let body = Softbody::new(
			vec![Node::new(V2::new(0., 0.), 1., 0.)],
			[1., 1., 1.],
		);
		assert_eq!(generator.force(&body, 0), V2::zeros());
		pointer.write().unwrap().pressed = true;
		pointer.write().unwrap().pos = [10., 0.];
		let force = generator.force(&body, 0);
		assert!((force - V2::new(3., 0.)).magnitude() < 1e-6);
	}
}
