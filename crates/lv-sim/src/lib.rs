//! `lv-sim`: Euler–Maruyama integration of the 2D Langevin equation.
//!
//! # Step loop
//!
//! ```text
//! emit (t=0, x=0, y=0, vx=0, vy=0)
//! for n in 1..=N:
//!   ηx, ηy ← NormalSampler::draw() ×2        (x first, then y)
//!   v ← v - (γ/m)·v·dt + sqrt(2γkBT/m)·sqrt(dt)·η     per axis
//!   r ← r + v·dt                              uses the *updated* v
//!   t ← n·dt
//!   emit (t, x, y, vx, vy)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`Ensemble`] members on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lv_core::PhysicalParameters;
//! use lv_sim::IntegratorBuilder;
//!
//! let params = PhysicalParameters::new(1.0, 1.0, 1.0, 0.01, 1000);
//! let integrator = IntegratorBuilder::new(params).seed(42).build()?;
//! for state in integrator {
//!     println!("{state}");
//! }
//! ```

pub mod builder;
pub mod ensemble;
pub mod error;
pub mod integrator;
pub mod observer;
pub mod trajectory;


pub use builder::IntegratorBuilder;
pub use ensemble::Ensemble;
pub use error::{SimError, SimResult};
pub use integrator::LangevinIntegrator;
pub use observer::TrajectoryObserver;
pub use trajectory::Trajectory;
