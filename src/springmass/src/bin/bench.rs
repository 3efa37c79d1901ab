use std::time::SystemTime;

use springmass::scene::Scene;

fn main() {
	let start = SystemTime::now();
	let mut scene = Scene::default();
	scene.init_test();
	let rframes = 600;
	for _ in 0..rframes {
		scene.step();
	}
	let time = rframes as f32 * scene.tick;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
