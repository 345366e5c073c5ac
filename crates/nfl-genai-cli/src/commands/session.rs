use anyhow::Result;
use nfl_genai_core::session::{self, SessionId};
use nfl_genai_core::time::format_now;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn generate(name: &str, seed: Option<u64>) -> Result<()> {
    let id = build(name, seed);

    tracing::info!(
        prefix_len = id.prefix_len(),
        "Session started at {}",
        format_now()
    );
    println!("{}", id);

    Ok(())
}

fn build(name: &str, seed: Option<u64>) -> SessionId {
    match seed {
        Some(seed) => session::generate_with_rng(name, &mut StdRng::seed_from_u64(seed)),
        None => session::generate(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_build_is_reproducible() {
        assert_eq!(build("Pat Mahomes", Some(15)), build("Pat Mahomes", Some(15)));
    }

    #[test]
    fn test_unseeded_build() {
        let id = build("Pat Mahomes", None);
        assert_eq!(id.prefix(), "PatMahomes");
    }
}
