//! GlitchLab Engine
//!
//! This crate provides deterministic procedural glitch-art generation: a
//! library of pixel-level glitch transforms, a random effect combinator,
//! and procedural base-image generators. All output is byte-identical
//! given the same seed and parameters.
//!
//! # Features
//!
//! - **Glitch Transforms**: Pixel sort, RGB shift, scan lines, data mosh,
//!   JPEG artifacts, wave distortion, channel swap, slice shift, color
//!   overlay, channel emphasis
//! - **Effect Combinator**: Intensity-tiered random pipelines drawn from
//!   serializable effect descriptors
//! - **Base Generators**: Gradient, geometric, noise, vaporwave, and
//!   cyberpunk starting images for when no photograph is supplied
//! - **Deterministic PNG**: Fixed compression settings for byte-identical
//!   output
//!
//! # Example
//!
//! ```no_run
//! use glitchlab_engine::base::{BaseSpec, BaseStyle};
//! use glitchlab_engine::combo::Intensity;
//! use glitchlab_engine::rng::DeterministicRng;
//! use glitchlab_engine::session::GlitchSession;
//! use std::path::Path;
//!
//! let spec = BaseSpec::new(640, 480, BaseStyle::Vaporwave);
//! let mut session = GlitchSession::from_base(&spec, 42).unwrap();
//! let mut rng = DeterministicRng::new(42);
//!
//! session
//!     .rgb_shift([6, 0], [0, 0], [-6, 0])
//!     .random_glitch_combo(Intensity::Medium, &mut rng)
//!     .unwrap();
//!
//! session.save(Path::new("glitched.png"), 90).unwrap();
//! ```
//!
//! # Determinism
//!
//! - Same input + same seed = byte-identical output
//! - PCG32 RNG is used for all random operations; seeds are mandatory
//! - BLAKE3-derived sub-seeds decorrelate per-style generator streams
//! - PNG encoding uses fixed compression settings

pub mod base;
pub mod buffer;
pub mod combo;
pub mod effects;
pub mod palette;
pub mod png;
pub mod rng;
pub mod session;

// Re-export main types for convenience
pub use base::{generate_unique, BaseSpec, BaseStyle, GenerateError, NoiseKind};
pub use buffer::{Channels, PixelBuffer};
pub use combo::{random_glitch_combo, EffectKind, EffectOp, Intensity};
pub use effects::{ChannelId, Direction, EffectError, SwapKind};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
pub use session::{GlitchSession, SessionError};
