//! Digit font, line roles and the digit-or-command byte decoding.

/// Segment patterns for the digits 0..=9.
///
/// Bit `n` is set when the line with role index `n` is lit, so bit 7 is
/// segment a and bit 1 is segment g. Bit 0 belongs to the decimal point and is
/// never set here; the point is driven on its own.
///
/// 9 is drawn without segment d (no bottom bar).
///
/// ```text
///    aaa
///   f   b
///    ggg
///   e   c
///    ddd  dp
/// ```
pub const NUMERALS: [u8; 10] = [
    0b1111_1100, // 0
    0b0110_0000, // 1
    0b1101_1010, // 2
    0b1111_0010, // 3
    0b0110_0110, // 4
    0b1011_0110, // 5
    0b1011_1110, // 6
    0b1110_0000, // 7
    0b1111_1110, // 8
    0b1110_0110, // 9
];

/// Byte that switches the decimal point on.
pub const DECIMAL_POINT_ON: u8 = b'.';
/// Byte that switches the decimal point off.
pub const DECIMAL_POINT_OFF: u8 = b' ';

/// Logical role of an output line, in line-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Role {
    DecimalPoint = 0,
    G = 1,
    F = 2,
    E = 3,
    D = 4,
    C = 5,
    B = 6,
    A = 7,
}

impl Role {
    /// All eight roles in line-table order.
    pub const ALL: [Role; 8] = [
        Role::DecimalPoint,
        Role::G,
        Role::F,
        Role::E,
        Role::D,
        Role::C,
        Role::B,
        Role::A,
    ];

    /// The seven segment roles, decimal point excluded.
    pub const SEGMENTS: [Role; 7] = [
        Role::G,
        Role::F,
        Role::E,
        Role::D,
        Role::C,
        Role::B,
        Role::A,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const NINE: Digit = Digit(9);

    /// Returns `None` for values above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Digit(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next digit, 9 wraps to 0.
    pub const fn wrapping_next(self) -> Self {
        if self.0 == 9 { Digit(0) } else { Digit(self.0 + 1) }
    }

    /// The previous digit, 0 wraps to 9.
    pub const fn wrapping_prev(self) -> Self {
        if self.0 == 0 { Digit(9) } else { Digit(self.0 - 1) }
    }

    /// Font pattern for this digit.
    pub const fn pattern(self) -> u8 {
        NUMERALS[self.0 as usize]
    }

    /// Whether `role` is lit when this digit is shown.
    ///
    /// Always `false` for the decimal point.
    pub const fn lights(self, role: Role) -> bool {
        (self.pattern() >> role.index()) & 0x01 != 0
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

/// A decoded render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Show a digit on the seven segments.
    Show(Digit),
    /// Light the decimal point.
    DecimalPointOn,
    /// Darken the decimal point.
    DecimalPointOff,
}

impl Command {
    /// Decode a digit-or-command byte.
    ///
    /// `0..=9` show that digit, `b'.'` and `b' '` switch the decimal point.
    /// Every other byte decodes to `None`.
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            0..=9 => Some(Command::Show(Digit(value))),
            DECIMAL_POINT_ON => Some(Command::DecimalPointOn),
            DECIMAL_POINT_OFF => Some(Command::DecimalPointOff),
            _ => None,
        }
    }
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Command::Show(digit)
    }
}
