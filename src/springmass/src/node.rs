use rand::Rng;
use tracing::warn;

use crate::posbox::Posbox;
use crate::softbody::Softbody;
use crate::spring::Spring;
use crate::V2;
use protocol::pr_model::PrNode;

// small random nudge to separate coincident nodes
pub fn rp() -> V2 {
	let mut rng = rand::thread_rng();
	V2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * 1e-3
}

#[derive(Clone)]
pub struct Node {
	pub pos: V2,
	// mass * velocity, integrated directly over a unit timestep
	pub momentum: V2,
	pub mass: f32,
	pub damping: f32,
	pub springs: Vec<Spring>,
}

impl Node {
	pub fn new(pos: V2, mass: f32, damping: f32) -> Self {
		Self {
			pos,
			momentum: V2::zeros(),
			mass,
			damping,
			springs: Vec::new(),
		}
	}

	pub fn with_springs(mut self, springs: Vec<Spring>) -> Self {
		self.springs = springs;
		self
	}

	// hooke acceleration accumulated straight into momentum,
	// positions is a frozen snapshot of the owning body
	pub fn integrate_springs(&mut self, positions: &[V2]) {
		for idx in 0..self.springs.len() {
			let spring = self.springs[idx];
			let target = positions[spring.target];
			let dp = self.pos - target;
			let l = dp.magnitude();
			if !l.is_normal() {
				warn!("bad spring length {}", l);
				self.pos += rp();
				continue;
			}
			let goal = target + dp * (spring.rest_length / l);
			self.momentum += (goal - self.pos) * (spring.stiffness / self.mass);
		}
	}

	pub fn integrate_external(&mut self, force: V2) {
		self.momentum += force;
	}

	// rigid is the momentum this node would carry under pure bulk motion,
	// only the deviation from it is damped
	pub fn damp(&mut self, rigid: V2) {
		self.momentum = rigid + (self.momentum - rigid) * (1f32 - self.damping);
	}

	pub fn boundary_collide(&mut self, bounds: &Posbox, friction: f32) {
		let out = bounds.outside(&self.pos);
		if out[0] {
			self.momentum[0] = -self.momentum[0];
			self.momentum *= 1f32 - friction;
		}
		if out[1] {
			self.momentum[1] = -self.momentum[1];
			self.momentum *= 1f32 - friction;
		}
		bounds.clamp(&mut self.pos);
	}

	// momentum kick only, no positional correction, so deep
	// interpenetration resolves over several ticks. field is negative
	// inside, the kick runs against this node's outward normal, which
	// faces the other body in a contact
	pub fn collide_with_body(
		&mut self,
		other: &Softbody,
		normal: V2,
		damping: f32,
		force: f32,
	) {
		let field = other.volume_field(self.pos, 1f32);
		if field < 0f32 {
			self.momentum += normal * (force * field);
			self.momentum *= 1f32 - damping;
		}
	}

	pub fn render(&self, normal: V2, radius: f32) -> PrNode {
		PrNode {
			pos: [self.pos[0], self.pos[1]],
			normal: [normal[0], normal[1]],
			radius,
		}
	}
}
