use std::{cmp::max, error::Error, fmt, str::FromStr};

/// One of the 64 cells of the board, addressed by file and rank,
/// both zero-indexed from white's left corner.
///
/// Squares are plain values: two squares with the same coordinates
/// are equal.
///
/// # Examples
///
/// ```
/// use skirmish::Square;
///
/// let square = Square::new(4, 1);
/// assert_eq!(square, Square::E2);
/// assert_eq!(square.file(), 4);
/// assert_eq!(square.rank(), 1);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(i8);

impl Square {
    /// Constructs a square from file and rank.
    ///
    /// # Panics
    ///
    /// Debug assertion that both coordinates are in `0..8`.
    pub fn new(file: i8, rank: i8) -> Square {
        debug_assert!(0 <= file && file < 8);
        debug_assert!(0 <= rank && rank < 8);
        Square(file | (rank << 3))
    }

    /// Constructs a square from possibly out-of-range coordinates.
    pub fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if 0 <= file && file < 8 && 0 <= rank && rank < 8 {
            Some(Square::new(file, rank))
        } else {
            None
        }
    }

    /// Constructs a square from its index in `0..64`.
    pub fn from_index(index: i8) -> Option<Square> {
        if 0 <= index && index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn file(self) -> i8 {
        self.0 & 7
    }

    #[inline]
    pub fn rank(self) -> i8 {
        self.0 >> 3
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The square displaced by `file_delta` files and `rank_delta` ranks,
    /// or `None` if that runs off the board.
    pub fn offset_by(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        Square::from_coords(self.file() + file_delta, self.rank() + rank_delta)
    }

    /// The absolute difference in files between `self` and `other`.
    #[inline]
    pub fn file_distance(self, other: Square) -> i8 {
        (self.file() - other.file()).abs()
    }

    /// The absolute difference in ranks between `self` and `other`.
    #[inline]
    pub fn rank_distance(self, other: Square) -> i8 {
        (self.rank() - other.rank()).abs()
    }

    /// The king-move distance between two squares.
    pub fn distance(self, other: Square) -> i8 {
        max(self.file_distance(other), self.rank_distance(other))
    }

    /// All 64 squares, `A1` through `H8`.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as i8);
            i += 1;
        }
        all
    };
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file() as u8) as char,
            (b'1' + self.rank() as u8) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string().to_uppercase())
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                Square::from_coords(file as i8 - 'a' as i8, rank as i8 - '1' as i8)
                    .ok_or(ParseSquareError)
            }
            _ => Err(ParseSquareError),
        }
    }
}

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_roundtrip() {
        for file in 0..8 {
            for rank in 0..8 {
                let square = Square::new(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_from_coords_rejects_out_of_range() {
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, -1), None);
        assert_eq!(Square::from_coords(3, 3), Some(Square::D4));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Square::D2.distance(Square::G3), 3);
        assert_eq!(Square::A1.distance(Square::A1), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("e4".parse::<Square>().ok(), Some(Square::E4));
        assert_eq!(Square::H8.to_string(), "h8");
        assert!("e9".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }
}
