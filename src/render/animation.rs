//! Cosmetic animation choices for card icons.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// animate.css classes an icon badge may use.
pub const ICON_ANIMATIONS: [&str; 5] = [
    "animate__bounce",
    "animate__pulse",
    "animate__rubberBand",
    "animate__shakeX",
    "animate__shakeY",
];

/// Tilt angles (degrees) cycled through by card position.
pub const CARD_ANGLES: [i32; 7] = [4, -8, -7, 11, 13, -17, 20];

/// Pick an icon animation from the given random source.
pub fn pick_icon_animation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ICON_ANIMATIONS
        .choose(rng)
        .copied()
        .unwrap_or(ICON_ANIMATIONS[0])
}

/// Tilt angle for the card at `index`.
pub fn card_angle(index: usize) -> i32 {
    CARD_ANGLES[index % CARD_ANGLES.len()]
}

/// Random source for a render: seeded when reproducible output is wanted.
pub fn animation_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choices() {
        let mut a = animation_rng(Some(7));
        let mut b = animation_rng(Some(7));

        let first: Vec<_> = (0..10).map(|_| pick_icon_animation(&mut a)).collect();
        let second: Vec<_> = (0..10).map(|_| pick_icon_animation(&mut b)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_choice_is_known_animation() {
        let mut rng = animation_rng(Some(1));
        for _ in 0..20 {
            assert!(ICON_ANIMATIONS.contains(&pick_icon_animation(&mut rng)));
        }
    }

    #[test]
    fn test_card_angle_cycles() {
        assert_eq!(card_angle(0), 4);
        assert_eq!(card_angle(6), 20);
        assert_eq!(card_angle(7), 4);
    }
}
