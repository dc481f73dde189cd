/// A three-channel color whose interpretation (RGB or BGR) follows the
/// channel order of the image it is drawn onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// The same color with its first and third channels exchanged,
    /// converting between RGB and BGR.
    pub fn swapped(&self) -> Color {
        Color(self.2, self.1, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped_exchanges_outer_channels() {
        assert_eq!(Color(0, 0, 180).swapped(), Color(180, 0, 0));
        assert_eq!(Color(255, 128, 0).swapped(), Color(0, 128, 255));
    }

    #[test]
    fn test_swapped_is_involution() {
        let c = Color(1, 2, 3);
        assert_eq!(c.swapped().swapped(), c);
    }
}
