use springmass::scene::Scene;

#[test]
fn test_cloned_scene_steps_identically() {
	let mut scene = Scene::default();
	scene.init_test();
	let mut other = scene.clone();
	for _ in 0..30 {
		scene.step();
		other.step();
	}
	for (a, b) in scene.bodies.iter().zip(other.bodies.iter()) {
		assert_eq!(a.centroid, b.centroid);
		for (na, nb) in a.nodes.iter().zip(b.nodes.iter()) {
			assert_eq!(na.pos, nb.pos);
			assert_eq!(na.momentum, nb.momentum);
		}
	}
}

#[test]
fn test_fixed_seed_reproduces() {
	let mut scene = Scene::default();
	scene.init_test();
	let mut other = Scene::default();
	other.init_test();
	for _ in 0..30 {
		scene.step();
		other.step();
	}
	for (a, b) in scene.bodies.iter().zip(other.bodies.iter()) {
		for (na, nb) in a.nodes.iter().zip(b.nodes.iter()) {
			assert_eq!(na.pos, nb.pos);
		}
	}
}
