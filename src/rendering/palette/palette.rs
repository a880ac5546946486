use bevy::color::palettes::css;
use bevy::prelude::*;
use rand::Rng;

/// Named CSS colours marbles are painted with (black/white and near-background tones left out).
pub const MARBLE_COLORS: [(&str, Srgba); 40] = [
    ("Aqua", css::AQUA),
    ("Aquamarine", css::AQUAMARINE),
    ("Blue", css::BLUE),
    ("BlueViolet", css::BLUE_VIOLET),
    ("Brown", css::BROWN),
    ("Chartreuse", css::CHARTREUSE),
    ("Chocolate", css::CHOCOLATE),
    ("Coral", css::CORAL),
    ("CornflowerBlue", css::CORNFLOWER_BLUE),
    ("Crimson", css::CRIMSON),
    ("DarkOrange", css::DARK_ORANGE),
    ("DeepPink", css::DEEP_PINK),
    ("DeepSkyBlue", css::DEEP_SKY_BLUE),
    ("DodgerBlue", css::DODGER_BLUE),
    ("Fuchsia", css::FUCHSIA),
    ("Gold", css::GOLD),
    ("GreenYellow", css::GREEN_YELLOW),
    ("HotPink", css::HOT_PINK),
    ("Indigo", css::INDIGO),
    ("LawnGreen", css::LAWN_GREEN),
    ("Lime", css::LIME),
    ("LimeGreen", css::LIMEGREEN),
    ("Magenta", css::MAGENTA),
    ("MediumPurple", css::MEDIUM_PURPLE),
    ("Orange", css::ORANGE),
    ("OrangeRed", css::ORANGE_RED),
    ("Orchid", css::ORCHID),
    ("Pink", css::PINK),
    ("Purple", css::PURPLE),
    ("Red", css::RED),
    ("RoyalBlue", css::ROYAL_BLUE),
    ("Salmon", css::SALMON),
    ("SeaGreen", css::SEA_GREEN),
    ("SkyBlue", css::SKY_BLUE),
    ("SpringGreen", css::SPRING_GREEN),
    ("SteelBlue", css::STEEL_BLUE),
    ("Teal", css::TEAL),
    ("Tomato", css::TOMATO),
    ("Turquoise", css::TURQUOISE),
    ("Violet", css::VIOLET),
];

/// Uniformly random index into `MARBLE_COLORS`.
#[inline]
pub fn random_marble_color(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..MARBLE_COLORS.len())
}

#[inline]
pub fn marble_color(i: usize) -> Color {
    Color::Srgba(MARBLE_COLORS[i % MARBLE_COLORS.len()].1)
}

pub const WINNER_BANNER: Color = Color::Srgba(css::HOT_PINK);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_index_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            assert!(random_marble_color(&mut rng) < MARBLE_COLORS.len());
        }
    }

    #[test]
    fn colour_index_wraps() {
        assert_eq!(marble_color(MARBLE_COLORS.len()), marble_color(0));
    }
}
