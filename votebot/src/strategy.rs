use rand::Rng;

pub const DOUGHNUT: &str = ":doughnut:";
pub const POOP: &str = ":poop:";

/// Share of votes that go to the doughnut regardless of the listing.
pub const DOUGHNUT_PROBABILITY: f32 = 0.15;
/// Share of votes that go to the poop.
pub const POOP_PROBABILITY: f32 = 0.20;

/// Picks a shortcode from a probability roll in `[0, 1)` and a random index.
///
/// Returns `None` only when the roll falls through to the listing and the
/// listing is empty.
pub fn choose(probability: f32, index: usize, shortcodes: &[String]) -> Option<&str> {
    if probability < DOUGHNUT_PROBABILITY {
        Some(DOUGHNUT)
    } else if probability < DOUGHNUT_PROBABILITY + POOP_PROBABILITY {
        Some(POOP)
    } else if shortcodes.is_empty() {
        None
    } else {
        shortcodes.get(index % shortcodes.len()).map(String::as_str)
    }
}

pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, shortcodes: &'a [String]) -> Option<&'a str> {
    let probability = rng.random::<f32>();
    let index = if shortcodes.is_empty() { 0 } else { rng.random_range(0..shortcodes.len()) };
    choose(probability, index, shortcodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn listing() -> Vec<String> {
        [":joy:", ":wave:", ":ghost:"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choose_bands() {
        let codes = listing();
        assert_eq!(choose(0.0, 2, &codes), Some(DOUGHNUT));
        assert_eq!(choose(0.149, 2, &codes), Some(DOUGHNUT));
        assert_eq!(choose(0.15, 2, &codes), Some(POOP));
        assert_eq!(choose(0.349, 0, &codes), Some(POOP));
        assert_eq!(choose(0.36, 1, &codes), Some(":wave:"));
        assert_eq!(choose(0.99, 5, &codes), Some(":ghost:"));
    }

    #[test]
    fn test_choose_empty_listing() {
        assert_eq!(choose(0.9, 0, &[]), None);
        assert_eq!(choose(0.1, 0, &[]), Some(DOUGHNUT));
    }

    #[test]
    fn test_pick_distribution() {
        let codes = listing();
        let mut rng = StdRng::seed_from_u64(42);
        let rounds = 20_000;
        let (mut doughnut, mut poop, mut other) = (0, 0, 0);
        for _ in 0..rounds {
            match pick(&mut rng, &codes) {
                Some(DOUGHNUT) => doughnut += 1,
                Some(POOP) => poop += 1,
                Some(code) => {
                    assert!(codes.iter().any(|c| c == code));
                    other += 1;
                }
                None => panic!("listing is not empty"),
            }
        }
        let share = |n: i32| n as f32 / rounds as f32;
        assert!((share(doughnut) - 0.15).abs() < 0.02);
        assert!((share(poop) - 0.20).abs() < 0.02);
        assert!((share(other) - 0.65).abs() < 0.02);
    }
}
