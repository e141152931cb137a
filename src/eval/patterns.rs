//! Pattern scores for Gomoku evaluation
//!
//! These constants map a line's (count, open ends) shape to a threat value.
//! The same table scores offense and defense.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - immediate win
    pub const FIVE: i32 = 100_000;
    /// Four with at least one open end
    pub const FOUR: i32 = 20_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 6_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 900;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 350;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 70;
    /// Single stone with room on both sides
    pub const OPEN_ONE: i32 = 20;
}

/// Score a line of `count` contiguous stones with `open_ends` free ends.
///
/// Grows super-linearly with `count` and rewards open shapes; dead shapes
/// (no free end, below five) score nothing.
pub fn pattern_score(count: usize, open_ends: u8) -> i32 {
    match (count, open_ends) {
        (c, _) if c >= 5 => PatternScore::FIVE,
        (4, o) if o >= 1 => PatternScore::FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}
