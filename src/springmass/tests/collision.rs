use springmass::model::BodyModel;
use springmass::scene::Scene;
use springmass::V2;

fn overlapping_scene() -> Scene {
	let mut scene = Scene::default();
	let model = BodyModel::new_square(12, 100., 1., 0.05, 0.05, 0., [1.; 3]);
	scene.add_model(model.clone(), V2::new(360., 360.));
	scene.add_model(model, V2::new(420., 390.));
	scene
}

#[test]
fn test_overlap_kicks_momentum() {
	let mut scene = overlapping_scene();
	scene.step();
	let kicked: usize = scene.bodies[0]
		.nodes
		.iter()
		.filter(|node| node.momentum.magnitude() > 1e-3)
		.count();
	assert!(kicked > 0);
}

// the kick runs against the node's own outward normal, back toward the
// body it belongs to
#[test]
fn test_kick_points_home() {
	let mut scene = overlapping_scene();
	scene.step();
	let body = &scene.bodies[0];
	for (i, node) in body.nodes.iter().enumerate() {
		if node.momentum.magnitude() > 1e-3 {
			assert!(node.momentum.dot(&body.normals[i]) < 0f32);
		}
	}
}

#[test]
fn test_bodies_separate() {
	let mut scene = overlapping_scene();
	let gap = (scene.bodies[0].centroid - scene.bodies[1].centroid)
		.magnitude();
	for _ in 0..40 {
		scene.step();
	}
	let gap_after = (scene.bodies[0].centroid - scene.bodies[1].centroid)
		.magnitude();
	eprintln!("gap {} -> {}", gap, gap_after);
	assert!(gap_after > gap + 1.);
}

// a body alone in the scene never self-collides
#[test]
fn test_single_body_no_kick() {
	let mut scene = Scene::default();
	let model = BodyModel::new_square(12, 100., 1., 0.05, 0., 0., [1.; 3]);
	scene.add_model(model, V2::new(360., 360.));
	for _ in 0..5 {
		scene.step();
	}
	for node in scene.bodies[0].nodes.iter() {
		assert!(node.momentum.magnitude() < 1e-2);
	}
}
