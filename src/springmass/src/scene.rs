use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::controller_message::ControllerMessage;
use crate::forces::{ForceGenerator, Gravity, PointerForce};
use crate::model::BodyModel;
use crate::posbox::Posbox;
use crate::softbody::Softbody;
use crate::V2;
use protocol::pr_model::PrScene;
use protocol::user_event::Pointer;

#[derive(Clone)]
pub struct Scene {
	// seconds per tick, real-time pacing only, the integrator itself
	// works in unit timesteps
	pub tick: f32,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	bounds: Posbox,
	friction: f32,
	collision_damping: f32,
	collision_force: f32,

	pointer: Arc<RwLock<Pointer>>,
	pub bodies: Vec<Softbody>,
	generators: Vec<Box<dyn ForceGenerator>>,
}

impl Default for Scene {
	fn default() -> Self {
		Self {
			tick: 1. / 60.,
			forward_frames: -1,
			bounds: Posbox::new(720., 720.),
			friction: 0.1,
			collision_damping: 0.1,
			collision_force: 200.,
			pointer: Arc::new(RwLock::new(Pointer::default())),
			bodies: Vec::new(),
			generators: Vec::new(),
		}
	}
}

impl Scene {
	pub fn with_bounds(mut self, bounds: Posbox) -> Self {
		self.bounds = bounds;
		self
	}

	pub fn with_friction(mut self, friction: f32) -> Self {
		self.friction = friction;
		self
	}

	pub fn with_collision_damping(mut self, damping: f32) -> Self {
		self.collision_damping = damping;
		self
	}

	pub fn with_collision_force(mut self, force: f32) -> Self {
		self.collision_force = force;
		self
	}

	pub fn with_tick(mut self, tick: f32) -> Self {
		self.tick = tick;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	// shared per-tick pointer state, hand a clone to the frontend
	pub fn pointer(&self) -> Arc<RwLock<Pointer>> {
		self.pointer.clone()
	}

	pub fn add_model(&mut self, model: BodyModel, offset: V2) {
		info!("add body: {} nodes", model.nodes.len());
		let mut body = model.build();
		for node in body.nodes.iter_mut() {
			node.pos += offset;
		}
		// leave valid attributes for generators and collisions that
		// run before this body's first own step
		body.reset_attributes();
		body.calculate_attributes();
		body.calculate_surface();
		self.bodies.push(body);
	}

	pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) {
		self.generators.push(generator);
	}

	pub fn init_test(&mut self) {
		self.bodies = Vec::new();
		self.generators = Vec::new();
		let mut rng = StdRng::seed_from_u64(17);
		for m in 0..2 {
			for n in 0..2 {
				let rotation = rng.gen_range(0f32..std::f32::consts::TAU);
				let model = BodyModel::new_square(
					12,
					120.,
					1.,
					0.02,
					0.05,
					rotation,
					[0.2 + 0.2 * m as f32, 0.5, 0.3 + 0.2 * n as f32],
				);
				let offset = V2::new(
					200. + 320. * m as f32,
					200. + 320. * n as f32,
				);
				self.add_model(model, offset);
			}
		}
		self.add_generator(Gravity::new(V2::new(0., 0.5)).build());
		self.add_generator(
			PointerForce::new(self.pointer.clone())
				.with_strength(2.)
				.build(),
		);
	}

	// one tick. bodies advance in list order, so a collision against a
	// later body uses that body's previous frame's surface, against an
	// earlier body this frame's. kept sequential on purpose
	pub fn step(&mut self) {
		for i in 0..self.bodies.len() {
			let mut external = V2::zeros();
			for generator in self.generators.iter() {
				external += generator.force(&self.bodies[i], i);
			}
			let body = &mut self.bodies[i];
			body.external_force = external;
			body.integrate_forces();
			body.reset_attributes();
			body.calculate_attributes();
			body.calculate_surface();
			body.advance(&self.bounds, self.friction);
			for j in 0..self.bodies.len() {
				if j == i {
					continue;
				}
				let (body, other) = if i < j {
					let (head, tail) = self.bodies.split_at_mut(j);
					(&mut head[i], &tail[0])
				} else {
					let (head, tail) = self.bodies.split_at_mut(i);
					(&mut tail[0], &head[j])
				};
				body.collide_with(
					other,
					self.collision_damping,
					self.collision_force,
				);
			}
		}
	}

	pub fn pr_scene(&self) -> PrScene {
		PrScene {
			bodies: self.bodies.iter().map(|body| body.render()).collect(),
		}
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<PrScene>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut start_time = SystemTime::now();
		let rtime: u64 = (self.tick * 1e6) as u64;
		let mut first_frame = true;
		loop {
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				if !first_frame {
					self.step();
				} else {
					first_frame = false;
				}
				let model = self.pr_scene();
				if tx.send(model).is_err() {
					// frontend went away
					return;
				}
			}

			let next_time = SystemTime::now();
			let dt = next_time
				.duration_since(start_time)
				.unwrap_or_default()
				.as_micros() as u64;
			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControllerMessage::TogglePause => {
						if self.forward_frames == 0 {
							self.forward_frames = -1;
						} else {
							self.forward_frames = 0;
						}
					}
					ControllerMessage::FrameForward => {
						if self.forward_frames == 0 {
							self.forward_frames += 1;
						}
					}
					ControllerMessage::Pointer(pos, pressed) => {
						let mut pointer = self.pointer.write().unwrap();
						pointer.pos = pos;
						pointer.pressed = pressed;
					}
				}
			}
			if dt < rtime {
				std::thread::sleep(Duration::from_micros(rtime - dt));
			}
			start_time = next_time;
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_step_stays_finite() {
		let mut scene = Scene::default();
		scene.init_test();
		for _ in 0..30 {
			scene.step();
		}
		for body in scene.bodies.iter() {
			assert!(body.centroid[0].is_finite());
			assert!(body.centroid[1].is_finite());
			for node in body.nodes.iter() {
				assert!(node.pos[0].is_finite());
				assert!(node.pos[1].is_finite());
				assert!(node.momentum.magnitude().is_finite());
			}
		}
	}

	#[test]
	fn test_bodies_stay_in_bounds() {
		let mut scene = Scene::default();
		scene.init_test();
		for _ in 0..120 {
			scene.step();
		}
		for body in scene.bodies.iter() {
			for node in body.nodes.iter() {
				assert!(node.pos[0] >= 0. && node.pos[0] <= 720.);
				assert!(node.pos[1] >= 0. && node.pos[1] <= 720.);
			}
		}
	}
}
