pub mod controller_message;
pub mod forces;
pub mod model;
pub mod node;
pub mod posbox;
pub mod scene;
pub mod softbody;
pub mod spring;

pub type V2 = nalgebra::Vector2<f32>;
pub type V3 = nalgebra::Vector3<f32>;
