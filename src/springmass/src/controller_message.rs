pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	// per-tick pointer sample: screen position, press state
	Pointer([f32; 2], bool),
}
