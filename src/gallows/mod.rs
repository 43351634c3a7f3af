//! Gallows illustration assets
//!
//! Provides the embedded default stage art compiled into the binary and the
//! directory-backed loader.

mod art;
mod embedded;

pub use art::{AssetError, GallowsArt};
pub use embedded::{STAGES, STAGES_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_count_matches_const() {
        assert_eq!(STAGES.len(), STAGES_COUNT);
    }

    #[test]
    fn one_stage_per_miss() {
        // Ground state plus one stage per allowed miss
        assert_eq!(STAGES_COUNT, 9);
    }
}
