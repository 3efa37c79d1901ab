use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use springmass::forces::Gravity;
use springmass::model::BodyModel;
use springmass::posbox::Posbox;
use springmass::scene::Scene;
use springmass::V2;

#[derive(Parser, Debug)]
struct Args {
	#[arg(short, default_value = "blobs.yaml")]
	file_name: String,
	#[arg(short, long, default_value_t = 600)]
	ticks: usize,
	// dump the final render snapshot as yaml
	#[arg(long)]
	dump: bool,
}

#[derive(Deserialize, Debug)]
struct SceneConfig {
	width: f32,
	height: f32,
	friction: f32,
	collision_damping: f32,
	collision_force: f32,
	gravity: [f32; 2],
	seed: u64,
	bodies: Vec<BodyConfig>,
}

#[derive(Deserialize, Debug)]
struct BodyConfig {
	nodes: usize,
	size: f32,
	mass: f32,
	stiffness: f32,
	damping: f32,
	color: [f32; 3],
	offset: [f32; 2],
	// drawn from the seed when absent
	rotation: Option<f32>,
}

fn build_scene(config: &SceneConfig) -> Scene {
	let mut scene = Scene::default()
		.with_bounds(Posbox::new(config.width, config.height))
		.with_friction(config.friction)
		.with_collision_damping(config.collision_damping)
		.with_collision_force(config.collision_force);
	let mut rng = StdRng::seed_from_u64(config.seed);
	for body in config.bodies.iter() {
		let rotation = body
			.rotation
			.unwrap_or_else(|| rng.gen_range(0f32..std::f32::consts::TAU));
		let model = BodyModel::new_square(
			body.nodes,
			body.size,
			body.mass,
			body.stiffness,
			body.damping,
			rotation,
			body.color,
		);
		scene.add_model(model, V2::new(body.offset[0], body.offset[1]));
	}
	scene.add_generator(
		Gravity::new(V2::new(config.gravity[0], config.gravity[1])).build(),
	);
	scene
}

fn main() -> Result<()> {
	tracing_subscriber::fmt::init();
	let args = Args::parse();
	let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("scenarios")
		.join(&args.file_name);
	let file = File::open(&config_path)?;
	let config: SceneConfig = serde_yaml::from_reader(BufReader::new(file))?;
	let mut scene = build_scene(&config);
	for _ in 0..args.ticks {
		scene.step();
	}
	for (idx, body) in scene.bodies.iter().enumerate() {
		println!(
			"body {}: centroid ({:.1}, {:.1}) momentum ({:.3}, {:.3})",
			idx,
			body.centroid[0],
			body.centroid[1],
			body.linear_momentum[0],
			body.linear_momentum[1],
		);
	}
	if args.dump {
		println!("{}", serde_yaml::to_string(&scene.pr_scene())?);
	}
	Ok(())
}
