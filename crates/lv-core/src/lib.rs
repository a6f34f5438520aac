//! `lv-core`: foundational types for the Langevin Brownian-motion workspace.
//!
//! This crate is a dependency of every other `lv-*` crate.  It has no `lv-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, `tracing`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`rng`]      | `UniformSource` trait, `SimRng`, `ScriptedSource`         |
//! | [`normal`]   | `NormalSampler` (Box–Muller on an open-interval uniform)  |
//! | [`params`]   | `PhysicalParameters` and their derived coefficients       |
//! | [`config`]   | `SimConfig`: named, defaulted run configuration           |
//! | [`state`]    | `ParticleState`: one `(t, x, y, vx, vy)` record           |
//! | [`error`]    | `LvError`, `LvResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SimConfig`,             |
//! |         | `PhysicalParameters` and `ParticleState`.                  |

pub mod config;
pub mod error;
pub mod normal;
pub mod params;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LvError, LvResult};
pub use normal::NormalSampler;
pub use params::PhysicalParameters;
pub use rng::{ScriptedSource, SimRng, UniformSource, seed_from_time};
pub use state::ParticleState;
