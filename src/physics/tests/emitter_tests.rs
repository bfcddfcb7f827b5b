use physics::emitter::ParticleEmitter;
use physics::engine::Engine;
use physics::particle::Particle;
use physics::V2;

#[test]
fn fractional_rate_averages_out() {
	let mut engine = Engine::default();
	let mut emitter =
		ParticleEmitter::new(V2::zeros(), 2.5, |pos| Particle::new(pos).with_radius(1.));

	for _ in 0..10 {
		emitter.update(&mut engine, 1.);
		let carry = emitter.accumulator();
		assert!((0. ..1.).contains(&carry), "carry out of range: {}", carry);
	}
	assert_eq!(engine.particle_count(), 25);
}

#[test]
fn spawn_count_is_independent_of_call_frequency() {
	let mut coarse_engine = Engine::default();
	let mut coarse =
		ParticleEmitter::new(V2::zeros(), 1.5, |pos| Particle::new(pos));
	let mut fine_engine = Engine::default();
	let mut fine = ParticleEmitter::new(V2::zeros(), 1.5, |pos| Particle::new(pos));

	for _ in 0..4 {
		coarse.update(&mut coarse_engine, 1.);
	}
	for _ in 0..16 {
		fine.update(&mut fine_engine, 0.25);
	}
	assert_eq!(coarse_engine.particle_count(), 6);
	assert_eq!(fine_engine.particle_count(), 6);
}

#[test]
fn spawned_particles_start_at_emitter_position() {
	let mut engine = Engine::default();
	let mut emitter =
		ParticleEmitter::new(V2::new(3., 4.), 1., |pos| Particle::new(pos));
	let spawned = emitter.update(&mut engine, 1.);
	assert_eq!(spawned.len(), 1);
	assert_eq!(engine.particle(spawned[0]).unwrap().pos, V2::new(3., 4.));
}

#[test]
fn disabled_emitter_spawns_nothing() {
	let mut engine = Engine::default();
	let mut emitter = ParticleEmitter::new(V2::zeros(), 10., |pos| Particle::new(pos));
	emitter.set_emitting(false);
	for _ in 0..5 {
		assert!(emitter.update(&mut engine, 1.).is_empty());
	}
	assert_eq!(engine.particle_count(), 0);
}
