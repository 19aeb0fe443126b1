//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации (системный и детерминированный);
//! - доменное расширение seed'а для воспроизводимых раздач.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
