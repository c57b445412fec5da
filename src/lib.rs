pub mod deal;
pub mod error;
pub mod interpolate;
pub mod matrix;
pub mod point;
pub mod polynomial;
pub mod radix;
pub mod rational;
pub mod share;

pub use error::{Error, Result};
pub use interpolate::{reconstruct_all, reconstruct_secret, Method, Reconstruction};
pub use point::{Point, PointSet};
pub use rational::Rational;
