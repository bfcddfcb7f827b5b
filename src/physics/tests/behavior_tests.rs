use fnv::FnvHashMap;

use physics::behavior::{
	Attract, Behavior, BodySnapshot, Bounce, ConstantForce, Drag, DynamicForce,
	Friction, Gravitation, Gravity, Jitter, WorldView,
};
use physics::bounds::Bounds;
use physics::engine::Engine;
use physics::handle::ParticleId;
use physics::particle::Particle;
use physics::V2;

fn apply_alone(behavior: &mut dyn Behavior, p: &mut Particle) {
	let bodies: [BodySnapshot; 0] = [];
	let index = FnvHashMap::default();
	let view = WorldView::new(&bodies, &index);
	behavior.apply(ParticleId::default(), p, &view);
}

#[test]
fn constant_force_skips_locked() {
	let mut b = ConstantForce::new(V2::new(1., 2.));
	let mut p = Particle::new(V2::zeros());
	apply_alone(&mut b, &mut p);
	assert_eq!(p.force, V2::new(1., 2.));

	let mut locked = Particle::new(V2::zeros());
	locked.lock();
	apply_alone(&mut b, &mut locked);
	assert_eq!(locked.force, V2::zeros());
}

#[test]
fn gravity_produces_uniform_acceleration() {
	let mut engine = Engine::default().with_iters(1);
	engine.add_behavior(Gravity::new(V2::new(0., -0.1)));
	let light = engine.add_particle(Particle::new(V2::zeros()).with_mass(1.));
	let heavy = engine.add_particle(Particle::new(V2::new(50., 0.)).with_mass(10.));

	engine.update();
	let v_light = engine.particle(light).unwrap().velocity();
	let v_heavy = engine.particle(heavy).unwrap().velocity();
	assert!((v_light - v_heavy).magnitude() < 1e-6);
	assert!((v_light - V2::new(0., -0.1)).magnitude() < 1e-6);
}

#[test]
fn drag_opposes_motion_quadratically() {
	let mut b = Drag::new(0.1);
	let mut p = Particle::new(V2::zeros());
	p.set_velocity(V2::new(2., 0.));
	apply_alone(&mut b, &mut p);
	// |v|^2 = 4, force = -0.1 * 4 along -x
	assert!((p.force - V2::new(-0.4, 0.)).magnitude() < 1e-6);
}

#[test]
fn drag_skips_resting_particle() {
	let mut b = Drag::new(0.1);
	let mut p = Particle::new(V2::zeros());
	apply_alone(&mut b, &mut p);
	assert_eq!(p.force, V2::zeros());
}

#[test]
fn friction_snaps_slow_particles() {
	let mut b = Friction::new(0.1, 0.3);
	let mut p = Particle::new(V2::zeros());
	p.set_velocity(V2::new(0.05, 0.));
	apply_alone(&mut b, &mut p);
	assert_eq!(p.velocity(), V2::zeros());
	assert_eq!(p.force, V2::zeros());
}

#[test]
fn friction_applies_kinetic_force() {
	let mut b = Friction::new(0.1, 0.3);
	let mut p = Particle::new(V2::zeros());
	p.set_velocity(V2::new(2., 0.));
	apply_alone(&mut b, &mut p);
	assert!((p.force - V2::new(-0.3, 0.)).magnitude() < 1e-6);
}

#[test]
fn bounce_reflects_with_restitution() {
	let bounds = Bounds::new(0., 0., 100., 100.);
	let mut b = Bounce::new(bounds).with_restitution(0.8);
	let mut p = Particle::new(V2::new(-3., 50.)).with_radius(0.);
	p.set_velocity(V2::new(-5., 0.));
	apply_alone(&mut b, &mut p);

	assert_eq!(p.pos, V2::new(0., 50.));
	assert!((p.velocity() - V2::new(4., 0.)).magnitude() < 1e-6);
}

#[test]
fn bounce_insets_by_particle_radius() {
	let bounds = Bounds::new(0., 0., 100., 100.);
	let mut b = Bounce::new(bounds);
	let mut p = Particle::new(V2::new(2., 50.)).with_radius(5.);
	apply_alone(&mut b, &mut p);
	assert_eq!(p.pos, V2::new(5., 50.));
}

#[test]
fn jitter_stays_within_max_magnitude() {
	let mut b = Jitter::new(2.).with_seed(42);
	let mut p = Particle::new(V2::zeros());
	for _ in 0..50 {
		p.clear_force();
		apply_alone(&mut b, &mut p);
		assert!(p.force.magnitude() <= 2.0 + 1e-6);
	}
}

#[test]
fn jitter_skips_locked() {
	let mut b = Jitter::new(2.).with_seed(42);
	let mut p = Particle::new(V2::zeros());
	p.lock();
	apply_alone(&mut b, &mut p);
	assert_eq!(p.force, V2::zeros());
}

#[test]
fn dynamic_force_uses_callback() {
	let mut b = DynamicForce::new(|p: &Particle| V2::new(-p.pos.x, 1.));
	let mut p = Particle::new(V2::new(3., 0.));
	apply_alone(&mut b, &mut p);
	assert!((p.force - V2::new(-3., 1.)).magnitude() < 1e-6);
}

#[test]
fn attract_pulls_toward_target() {
	let mut engine = Engine::default();
	let target = engine.add_particle(Particle::new(V2::zeros()));
	let other = engine.add_particle(Particle::new(V2::new(10., 0.)));
	engine.add_behavior(Attract::new(target, 100.));

	engine.update();
	assert!(engine.particle(other).unwrap().pos.x < 10.);
	// the target itself is skipped
	assert_eq!(engine.particle(target).unwrap().pos, V2::zeros());
}

#[test]
fn attract_respects_radius_cutoff() {
	let mut engine = Engine::default();
	let target = engine.add_particle(Particle::new(V2::zeros()));
	let other = engine.add_particle(Particle::new(V2::new(10., 0.)));
	engine.add_behavior(Attract::new(target, 100.).with_radius(5.));

	engine.update();
	assert_eq!(engine.particle(other).unwrap().pos, V2::new(10., 0.));
}

#[test]
fn gravitation_attracts_pairs() {
	let mut engine = Engine::default();
	let a = engine.add_particle(Particle::new(V2::zeros()).with_mass(5.));
	let b = engine.add_particle(Particle::new(V2::new(10., 0.)).with_mass(5.));
	engine.add_behavior(Gravitation::new(1.));

	engine.update();
	let pa = engine.particle(a).unwrap().pos;
	let pb = engine.particle(b).unwrap().pos;
	assert!(pa.x > 0.);
	assert!(pb.x < 10.);
	// symmetric masses, symmetric pull
	assert!((pa.x - (10. - pb.x)).abs() < 1e-4);
}

#[test]
fn gravitation_with_sources_ignores_outsiders() {
	let mut engine = Engine::default();
	let heavy = engine.add_particle(Particle::new(V2::zeros()).with_mass(100.));
	let probe = engine.add_particle(Particle::new(V2::new(10., 0.)));
	let sources = vec![probe];
	engine.add_behavior(Gravitation::new(1.).with_sources(sources));

	engine.update();
	// probe only attracts others; nothing pulls the probe itself
	assert_eq!(engine.particle(probe).unwrap().pos, V2::new(10., 0.));
	assert!(engine.particle(heavy).unwrap().pos.x > 0.);
}
