//! The sticker-array representation of a pocket cube configuration.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::InvalidConfig;
use crate::moves::Move;

/// One configuration of the cube: 24 single-character color labels, four per
/// face, in the fixed layout
///
/// ```text
///         0  1
///         2  3
/// 16 17   8  9    4  5   20 21
/// 18 19  10 11    6  7   22 23
///        12 13
///        14 15
/// ```
///
/// so face k occupies positions `4k..4k + 4`: Up, Right, Front, Down, Left,
/// Back. Two configurations are equal iff their sticker arrays are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    stickers: [u8; 24],
}

impl Cube {
    /// The canonically labeled solved cube.
    pub const SOLVED: Cube = Cube {
        stickers: *b"WWWWRRRRGGGGYYYYOOOOBBBB",
    };

    /// Turn the cube by one move, producing the new configuration. The
    /// receiver is left untouched.
    pub fn apply(&self, mv: Move) -> Cube {
        let perm = mv.permutation();
        Cube {
            stickers: std::array::from_fn(|i| self.stickers[perm[i]]),
        }
    }

    /// Apply a sequence of moves in order.
    pub fn apply_all<I: IntoIterator<Item = Move>>(&self, moves: I) -> Cube {
        moves.into_iter().fold(*self, |cube, mv| cube.apply(mv))
    }

    /// Whether every face shows a single label. No particular labeling is
    /// required, only per-face uniformity.
    pub fn is_solved(&self) -> bool {
        self.stickers
            .chunks_exact(4)
            .all(|face| face.iter().all(|&s| s == face[0]))
    }

    /// The number of faces showing a single label.
    pub fn solved_faces(&self) -> usize {
        self.stickers
            .chunks_exact(4)
            .filter(|face| face.iter().all(|&s| s == face[0]))
            .count()
    }

    /// Apply `n` moves chosen uniformly at random, with replacement, from the
    /// twelve legal moves. This only manufactures a start state; it plays no
    /// part in the searches themselves.
    pub fn scramble<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Cube {
        (0..n).fold(*self, |cube, _| {
            cube.apply(Move::ALL[rng.gen_range(0..Move::ALL.len())])
        })
    }

    /// The flat sticker string, grouped four labels per face.
    pub fn config(&self) -> String {
        let mut out = String::with_capacity(29);
        for (k, face) in self.stickers.chunks_exact(4).enumerate() {
            if k > 0 {
                out.push(' ');
            }
            out.extend(face.iter().map(|&s| s as char));
        }
        out
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::SOLVED
    }
}

impl FromStr for Cube {
    type Err = InvalidConfig;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut stickers = [0u8; 24];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if !c.is_ascii_graphic() {
                return Err(InvalidConfig::BadLabel(c));
            }
            if count < 24 {
                stickers[count] = c as u8;
            }
            count += 1;
        }
        if count != 24 {
            return Err(InvalidConfig::WrongCount(count));
        }
        Ok(Cube { stickers })
    }
}

/// Renders the unfolded cube as a cross, one 2x2 block per face:
///
/// ```text
///    WW
///    WW
/// OO GG RR BB
/// OO GG RR BB
///    YY
///    YY
/// ```
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = |face: usize, row: usize| {
            let offset = 4 * face + 2 * row;
            format!(
                "{}{}",
                self.stickers[offset] as char,
                self.stickers[offset + 1] as char
            )
        };
        for row in 0..2 {
            writeln!(f, "   {}", pair(0, row))?;
        }
        for row in 0..2 {
            writeln!(
                f,
                "{} {} {} {}",
                pair(4, row),
                pair(2, row),
                pair(1, row),
                pair(5, row)
            )?;
        }
        for row in 0..2 {
            writeln!(f, "   {}", pair(3, row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config())
    }
}
