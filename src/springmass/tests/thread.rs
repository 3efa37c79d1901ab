use std::sync::mpsc::channel;

use springmass::controller_message::ControllerMessage;
use springmass::scene::Scene;

#[test]
fn test_run_thread_pause_and_forward() {
	let mut scene = Scene::default().with_paused();
	scene.init_test();
	let (tx_model, rx_model) = channel();
	let (tx_ctrl, rx_ctrl) = channel();
	std::thread::spawn(move || scene.run_thread(tx_model, rx_ctrl));

	// paused scene still provides the first frame
	let first = rx_model.recv().unwrap();
	assert_eq!(first.bodies.len(), 4);
	assert_eq!(first.bodies[0].nodes.len(), 12);

	tx_ctrl.send(ControllerMessage::FrameForward).unwrap();
	let second = rx_model.recv().unwrap();
	assert_eq!(second.bodies.len(), 4);

	tx_ctrl
		.send(ControllerMessage::Pointer([360., 100.], true))
		.unwrap();
	tx_ctrl.send(ControllerMessage::TogglePause).unwrap();
	// playing now, frames keep coming
	let _ = rx_model.recv().unwrap();
	let _ = rx_model.recv().unwrap();
	// dropping rx_model ends the worker on its next send
}
