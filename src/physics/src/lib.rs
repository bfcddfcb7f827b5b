pub mod behavior;
pub mod bounds;
pub mod chain;
pub mod constraint;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod handle;
pub mod particle;
pub mod sink;
pub mod spring;
pub mod v2;

pub type V2 = nalgebra::Vector2<f32>;
