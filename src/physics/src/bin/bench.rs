use std::time::Instant;

use physics::bounds::Bounds;
use physics::chain::{ChainStrength, SpringChain};
use physics::emitter::ParticleEmitter;
use physics::engine::Engine;
use physics::particle::Particle;
use physics::sink::ParticleSink;
use physics::V2;

fn main() {
	let mut engine = Engine::default()
		.with_iters(30)
		.with_bounds(Bounds::new(-200., -200., 200., 200.));
	engine.default_setup();

	for i in 0..8 {
		let x = -150. + 40. * i as f32;
		let mut anchor = Particle::new(V2::new(x, 150.)).with_radius(2.);
		anchor.lock();
		let head = engine.add_particle(anchor);
		SpringChain::build(
			&mut engine,
			head,
			V2::new(0., -1.),
			100.,
			20,
			ChainStrength::Total(0.02),
		)
		.unwrap();
	}

	let mut emitter = ParticleEmitter::new(V2::new(0., 180.), 3.5, |pos| {
		Particle::new(pos).with_radius(2.)
	});
	let sink = ParticleSink::new(V2::new(0., -180.), 40.);

	let frames = 1000;
	let start = Instant::now();
	for _ in 0..frames {
		emitter.update(&mut engine, 1.);
		engine.update();
		sink.absorb(&mut engine);
	}
	let elapsed = start.elapsed();
	eprintln!(
		"INFO: {} frames, {} particles, {} springs, {:.1} us/frame",
		frames,
		engine.particle_count(),
		engine.spring_count(),
		elapsed.as_micros() as f64 / frames as f64,
	);
}
