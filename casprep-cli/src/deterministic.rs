//! Deterministic mode support for reproducible results

use crate::config::Config;

/// Seed for random subset selection.
///
/// An explicit `--seed` always wins. Otherwise deterministic mode (from the
/// CLI flag or `general.deterministic`) falls back to `general.seed`, and
/// non-deterministic runs get no seed at all.
pub fn sampling_seed(explicit: Option<u64>, deterministic: bool, config: &Config) -> Option<u64> {
    if explicit.is_some() {
        return explicit;
    }
    if deterministic || config.general.deterministic {
        log::debug!("Deterministic mode: seeding sampler with {}", config.general.seed);
        return Some(config.general.seed);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_seed_wins() {
        let config = Config::default();
        assert_eq!(sampling_seed(Some(7), true, &config), Some(7));
    }

    #[test]
    fn test_deterministic_uses_config_seed() {
        let mut config = Config::default();
        assert_eq!(sampling_seed(None, true, &config), Some(42));

        config.general.deterministic = true;
        config.general.seed = 1234;
        assert_eq!(sampling_seed(None, false, &config), Some(1234));
    }

    #[test]
    fn test_random_by_default() {
        assert_eq!(sampling_seed(None, false, &Config::default()), None);
    }
}
