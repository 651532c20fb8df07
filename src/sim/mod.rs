//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are pixels per tick)
//! - Seeded RNG only (launch is the single random event)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::PaddleRect;
pub use state::{Ball, GameState, Paddle};
pub use tick::tick;
