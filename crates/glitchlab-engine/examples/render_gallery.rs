//! Renders a small gallery: one glitched frame per base style.

use std::path::Path;

use glitchlab_engine::base::{BaseSpec, BaseStyle};
use glitchlab_engine::combo::Intensity;
use glitchlab_engine::png::{write_buffer_to_vec_with_hash, PngConfig};
use glitchlab_engine::rng::DeterministicRng;
use glitchlab_engine::session::{GlitchSession, SessionError};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const SEED: u32 = 42;

fn render(style: BaseStyle, out_dir: &Path) -> Result<(), SessionError> {
    let spec = BaseSpec::new(WIDTH, HEIGHT, style);
    let mut session = GlitchSession::from_base(&spec, SEED)?;

    // Re-seeding from the same value keeps the whole frame reproducible.
    let mut rng = DeterministicRng::new(SEED);
    session.random_glitch_combo(Intensity::Medium, &mut rng)?;

    let path = out_dir.join(format!("{}.png", style));
    session.save(&path, 90)?;

    let (bytes, hash) = write_buffer_to_vec_with_hash(session.buffer(), &PngConfig::default())?;
    println!(
        "  {:<10} {} ops, {} bytes, hash {}",
        style,
        session.applied_ops().len(),
        bytes.len(),
        &hash[..16]
    );
    Ok(())
}

fn main() {
    println!(
        "Rendering glitch gallery ({}x{}, seed {})...",
        WIDTH, HEIGHT, SEED
    );

    let out_dir = Path::new("gallery");
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        eprintln!("Error creating {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }

    for style in BaseStyle::CONCRETE {
        if let Err(e) = render(style, out_dir) {
            eprintln!("Error rendering {}: {}", style, e);
            std::process::exit(1);
        }
    }

    println!("Done. Wrote {} frames to gallery/", BaseStyle::CONCRETE.len());
}
