//! RNG module - random source and next-piece preview
//!
//! Shape selection consumes one value of a [`RandomSource`] modulo 7. The
//! default source is a small LCG so that the same seed replays the same game.

use crate::types::PieceKind;

/// Source of non-negative random integers.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is reserved; treat it as 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        SimpleRng::next_u32(self)
    }
}

/// Hands out shape ids, optionally one ahead as a preview.
#[derive(Debug, Clone)]
pub struct PieceQueue<R> {
    rng: R,
    show_next: bool,
    next: Option<PieceKind>,
}

impl<R: RandomSource> PieceQueue<R> {
    pub fn new(rng: R, show_next: bool) -> Self {
        Self {
            rng,
            show_next,
            next: None,
        }
    }

    fn roll(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_u32())
    }

    /// Shape for the next spawn.
    ///
    /// With the preview enabled the returned shape is the previous preview and a
    /// fresh preview is rolled immediately; the very first draw rolls both.
    pub fn draw(&mut self) -> PieceKind {
        if !self.show_next {
            return self.roll();
        }
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.roll(),
        };
        self.next = Some(self.roll());
        kind
    }

    /// Preview shape, if the preview is enabled and one has been rolled.
    pub fn peek(&self) -> Option<PieceKind> {
        self.next
    }

    /// Number of clockwise quarter turns for a randomized spawn.
    ///
    /// One of three outcomes is rolled but only the quarter turn is applied, so
    /// a spawn is upright two times in three and turned once otherwise.
    pub fn spawn_rotation(&mut self) -> u32 {
        u32::from(self.rng.next_u32() % 3 == 1)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of values.
    struct Scripted(Vec<u32>, usize);

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_coerced() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_all_shapes_show_up() {
        let mut queue = PieceQueue::new(SimpleRng::new(99), false);
        let mut seen = [0u32; 7];
        for _ in 0..700 {
            seen[queue.draw().index()] += 1;
        }
        assert!(seen.iter().all(|&n| n > 0), "{:?}", seen);
    }

    #[test]
    fn test_preview_is_next_draw() {
        let mut queue = PieceQueue::new(Scripted(vec![0, 1, 2, 3], 0), true);
        assert_eq!(queue.peek(), None);

        // First draw rolls the active shape and the preview.
        assert_eq!(queue.draw(), PieceKind::I);
        assert_eq!(queue.peek(), Some(PieceKind::J));
        assert_eq!(queue.draw(), PieceKind::J);
        assert_eq!(queue.peek(), Some(PieceKind::L));
    }

    #[test]
    fn test_no_preview_without_show_next() {
        let mut queue = PieceQueue::new(Scripted(vec![9, 11], 0), false);
        assert_eq!(queue.draw(), PieceKind::L); // 9 % 7 = 2
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.draw(), PieceKind::S); // 11 % 7 = 4
    }

    #[test]
    fn test_spawn_rotation_is_at_most_one_turn() {
        let mut queue = PieceQueue::new(Scripted(vec![0, 1, 2, 3, 4, 5, 7], 0), false);
        let turns: Vec<u32> = (0..7).map(|_| queue.spawn_rotation()).collect();
        assert_eq!(turns, [0, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_borrowed_source() {
        let mut rng = SimpleRng::new(5);
        let expected = SimpleRng::new(5).next_u32();
        let mut queue = PieceQueue::new(&mut rng, false);
        assert_eq!(queue.draw(), PieceKind::from_index(expected));
    }
}
