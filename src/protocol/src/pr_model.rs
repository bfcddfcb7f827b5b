// pr_model: read-only snapshot of the simulation for rendering

#[derive(Clone, Debug)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct PrSpring {
	pub ends: [[f32; 2]; 2],
	pub rest_length: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub springs: Vec<PrSpring>,
}
