use nalgebra::Rotation2;
use tracing::warn;

use crate::node::Node;
use crate::posbox::Posbox;
use crate::{V2, V3};
use protocol::pr_model::PrBody;

// 90 degree rotation, outward for counter-clockwise winding
fn perp(v: V2) -> V2 {
	V2::new(v[1], -v[0])
}

// ring of point masses with per-frame derived attributes,
// derived fields are transient and rebuilt from node state every tick
#[derive(Clone)]
pub struct Softbody {
	pub nodes: Vec<Node>,
	pub color: [f32; 3],

	pub mass: f32,
	pub centroid: V2,
	pub linear_momentum: V2,
	// only z is meaningful in 2d
	pub angular_momentum: V3,
	pub average_radius: f32,
	pub external_force: V2,
	pub normals: Vec<V2>,
	pub radii: Vec<f32>,
}

impl Softbody {
	pub fn new(nodes: Vec<Node>, color: [f32; 3]) -> Self {
		let len = nodes.len();
		Self {
			nodes,
			color,
			mass: 0f32,
			centroid: V2::zeros(),
			linear_momentum: V2::zeros(),
			angular_momentum: V3::zeros(),
			average_radius: 0f32,
			external_force: V2::zeros(),
			normals: vec![V2::zeros(); len],
			radii: vec![0f32; len],
		}
	}

	pub fn reset_attributes(&mut self) {
		self.mass = 0f32;
		self.centroid = V2::zeros();
		self.linear_momentum = V2::zeros();
		self.angular_momentum = V3::zeros();
		self.average_radius = 0f32;
		self.normals = vec![V2::zeros(); self.nodes.len()];
		self.radii = vec![0f32; self.nodes.len()];
	}

	// pass 2 needs the centroid from pass 1
	pub fn calculate_attributes(&mut self) {
		let n = self.nodes.len() as f32;
		for node in self.nodes.iter() {
			self.mass += node.mass;
			self.centroid += node.pos * node.mass;
			self.linear_momentum += node.momentum;
		}
		self.mass /= n;
		self.centroid /= self.mass * n;
		self.linear_momentum /= n;
		for node in self.nodes.iter() {
			let local = node.pos - self.centroid;
			self.angular_momentum += V3::new(local[0], local[1], 0f32)
				.cross(&V3::new(node.momentum[0], node.momentum[1], 0f32));
			self.average_radius += local.magnitude();
		}
		self.angular_momentum /= n;
		self.average_radius /= n;
	}

	// angle-bisector outward normals from the ring neighbours,
	// assumes consistent winding
	pub fn calculate_surface(&mut self) {
		let n = self.nodes.len();
		for i in 0..n {
			let prev = self.nodes[(i + n - 1) % n].pos;
			let next = self.nodes[(i + 1) % n].pos;
			let pos = self.nodes[i].pos;
			let e1 = perp(pos - prev).normalize();
			let e2 = perp(next - pos).normalize();
			// clamping can fold neighbours flat onto a wall, the edge
			// perpendiculars then cancel and the bisector vanishes
			let bisector = e1 + e2;
			let l = bisector.magnitude();
			if l.is_normal() {
				self.normals[i] = bisector / l;
			} else {
				warn!("bad surface bisector at node {}", i);
				self.normals[i] = e1;
			}
			self.radii[i] = (pos - self.centroid).magnitude();
		}
	}

	// compact-support hrbf approximation over the node samples,
	// negative inside, positive outside, zero on the boundary
	pub fn volume_field(&self, point: V2, reg: f32) -> f32 {
		let mut total = 0f32;
		for i in 0..self.nodes.len() {
			let dp = point - self.nodes[i].pos;
			let d = dp.magnitude();
			let r = self.radii[i];
			if d / r > 1f32 {
				continue;
			}
			let weight = r * r / (20f32 + reg * r * r);
			total -= (weight * self.normals[i])
				.dot(&(dp * (20f32 * (d - r).powi(3) / r.powi(5))));
		}
		total
	}

	// spring integration reads a frozen position snapshot,
	// node order does not matter
	pub fn integrate_forces(&mut self) {
		let positions: Vec<V2> =
			self.nodes.iter().map(|node| node.pos).collect();
		let force = self.external_force;
		for node in self.nodes.iter_mut() {
			node.integrate_springs(&positions);
			node.integrate_external(force);
		}
	}

	// damp the deviation from bulk motion, advance, bounce off the box,
	// must run after calculate_attributes/calculate_surface
	pub fn advance(&mut self, bounds: &Posbox, friction: f32) {
		let rot = Rotation2::new(self.angular_momentum[2]);
		let centroid = self.centroid;
		let average_radius = self.average_radius;
		let linear_momentum = self.linear_momentum;
		let bounds = *bounds;
		let update = move |node: &mut Node| {
			let local = node.pos - centroid;
			let rigid =
				(rot * local - local) / average_radius + linear_momentum;
			node.damp(rigid);
			node.pos += node.momentum;
			node.boundary_collide(&bounds, friction);
		};
		#[cfg(not(debug_assertions))]
		{
			use rayon::prelude::*;
			self.nodes.par_iter_mut().for_each(update);
		}
		#[cfg(debug_assertions)]
		self.nodes.iter_mut().for_each(update);
	}

	pub fn collide_with(&mut self, other: &Softbody, damping: f32, force: f32) {
		let normals = &self.normals;
		#[cfg(not(debug_assertions))]
		{
			use rayon::prelude::*;
			self.nodes
				.par_iter_mut()
				.zip(normals.par_iter())
				.for_each(|(node, normal)| {
					node.collide_with_body(other, *normal, damping, force)
				});
		}
		#[cfg(debug_assertions)]
		self.nodes
			.iter_mut()
			.zip(normals.iter())
			.for_each(|(node, normal)| {
				node.collide_with_body(other, *normal, damping, force)
			});
	}

	pub fn render(&self) -> PrBody {
		let nodes = self
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| node.render(self.normals[i], self.radii[i]))
			.collect();
		PrBody {
			nodes,
			color: self.color,
		}
	}
}
