//! Computes per-frame tint colors the way a renderer would, and prints the uniform data instead of
//! drawing it.
//!
//! Configured through environment variables:
//!
//! * `VECN_FRAMES`: number of frames to compute (default: 8).
//! * `VECN_SEED`: seed of the random number generator used for jitter (default: random).

use std::env::{self, VarError};

use anyhow::{bail, Context};
use vecn::{vec3, vector, Vec3f, Vec4f, VectorType};

const DEFAULT_FRAMES: u32 = 8;
const JITTER: f32 = 0.05;

struct Config {
    frames: u32,
    seed: Option<u64>,
}

impl Config {
    fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            frames: var("VECN_FRAMES")?.unwrap_or(DEFAULT_FRAMES),
            seed: var("VECN_SEED")?,
        })
    }
}

fn var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value set for `{name}` variable: '{v}'")),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(s)) => bail!(
            "invalid value set for `{name}` variable: {}",
            s.to_string_lossy()
        ),
    }
}

/// Computes the tint color of frame `tick`, as an RGBA uniform.
fn tint(tick: u32, rng: &mut fastrand::Rng) -> anyhow::Result<Vec4f> {
    let t = tick as f32;
    let base = vec3((t / 13.0).sin(), (t / 19.0).cos(), 0.0);
    let jitter = Vec3f::random_with(rng).fsubtract(0.5).fmultiply(JITTER);
    let rgb = base + jitter;
    log::trace!("frame {tick}: base {base}, jitter {jitter}");

    Ok(vector![4; rgb, 1.0]?)
}

#[vecn::main]
fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    log::debug!(
        "computing {} frames (seed: {:?})",
        config.frames,
        config.seed
    );

    let ty = VectorType::new(4)?;
    log::debug!("uniform type {ty} has {} swizzles", ty.swizzles().len());

    for tick in 0..config.frames {
        let color = tint(tick, &mut rng)?;
        log::debug!("frame {tick}: tint {color}, brightness {}", color.rgb().magnitude());

        // Some shaders expect BGRA; the swizzle name comes from data there.
        let bgra = color
            .swizzle("bgra")
            .context("failed to reorder color channels")?;
        println!("{tick}: {:?} {bgra}", color.to_array());
    }

    Ok(())
}
