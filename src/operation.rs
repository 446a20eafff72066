//! Menu operations offered by the interactive session.
//!
//! Raw menu input only becomes an [`Operation`] through
//! [`Operation::from_menu_choice`]; everything downstream matches on the enum.

use std::fmt;
use std::str::FromStr;

/// Engine entry point (or session action) behind a menu operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Integer conversion. `None` bases are asked for at the prompt.
    Integer { from: Option<u32>, to: Option<u32> },
    DecimalFloat,
    CodePointToChar,
    CharToCodePoint,
    DetectBase,
    ToggleTheme,
    Quit,
}

/// Heading under which an operation is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
    Advanced,
}

impl MenuGroup {
    pub const ALL: [MenuGroup; 5] = [
        MenuGroup::Decimal,
        MenuGroup::Binary,
        MenuGroup::Octal,
        MenuGroup::Hexadecimal,
        MenuGroup::Advanced,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MenuGroup::Decimal => "Decimal Conversions",
            MenuGroup::Binary => "Binary Conversions",
            MenuGroup::Octal => "Octal Conversions",
            MenuGroup::Hexadecimal => "Hexadecimal Conversions",
            MenuGroup::Advanced => "Advanced Features",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DecimalToBinary,
    BinaryToDecimal,
    DecimalToOctal,
    OctalToDecimal,
    DecimalToHex,
    HexToDecimal,
    BinaryToOctal,
    OctalToBinary,
    BinaryToHex,
    HexToBinary,
    OctalToHex,
    HexToOctal,
    DecimalToAnyBase,
    AnyBaseToDecimal,
    DecimalFloatToAnyBase,
    CodePointToChar,
    CharToCodePoint,
    DetectBase,
    ToggleTheme,
    Quit,
    AnyBaseToAnyBase,
}

impl Operation {
    /// All operations in menu-number order.
    pub const ALL: [Operation; 21] = [
        Operation::DecimalToBinary,
        Operation::BinaryToDecimal,
        Operation::DecimalToOctal,
        Operation::OctalToDecimal,
        Operation::DecimalToHex,
        Operation::HexToDecimal,
        Operation::BinaryToOctal,
        Operation::OctalToBinary,
        Operation::BinaryToHex,
        Operation::HexToBinary,
        Operation::OctalToHex,
        Operation::HexToOctal,
        Operation::DecimalToAnyBase,
        Operation::AnyBaseToDecimal,
        Operation::DecimalFloatToAnyBase,
        Operation::CodePointToChar,
        Operation::CharToCodePoint,
        Operation::DetectBase,
        Operation::ToggleTheme,
        Operation::Quit,
        Operation::AnyBaseToAnyBase,
    ];

    /// Number shown in the menu: the classic 1-19 entries, Quit at 20, then additions.
    pub fn menu_number(&self) -> u8 {
        Self::ALL
            .iter()
            .position(|op| op == self)
            .map_or(0, |index| index as u8 + 1)
    }

    /// Parse a menu choice: a menu number, or `q`/`quit`.
    pub fn from_menu_choice(choice: &str) -> Option<Operation> {
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
            return Some(Operation::Quit);
        }
        let number: u8 = choice.parse().ok()?;
        Self::ALL.iter().copied().find(|op| op.menu_number() == number)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::DecimalToBinary => "Decimal → Binary",
            Operation::BinaryToDecimal => "Binary → Decimal",
            Operation::DecimalToOctal => "Decimal → Octal",
            Operation::OctalToDecimal => "Octal → Decimal",
            Operation::DecimalToHex => "Decimal → Hex",
            Operation::HexToDecimal => "Hex → Decimal",
            Operation::BinaryToOctal => "Binary → Octal",
            Operation::OctalToBinary => "Octal → Binary",
            Operation::BinaryToHex => "Binary → Hex",
            Operation::HexToBinary => "Hex → Binary",
            Operation::OctalToHex => "Octal → Hex",
            Operation::HexToOctal => "Hex → Octal",
            Operation::DecimalToAnyBase => "Decimal → Any Base (2-16)",
            Operation::AnyBaseToDecimal => "Any Base (2-16) → Decimal",
            Operation::AnyBaseToAnyBase => "Any Base → Any Base",
            Operation::DecimalFloatToAnyBase => "Decimal Float → Any Base",
            Operation::CodePointToChar => "Code Point → Character",
            Operation::CharToCodePoint => "Character → Code Point",
            Operation::DetectBase => "Number Base Detection",
            Operation::ToggleTheme => "Toggle Color Scheme",
            Operation::Quit => "Quit",
        }
    }

    pub fn kind(&self) -> OperationKind {
        let integer = |from: Option<u32>, to: Option<u32>| OperationKind::Integer { from, to };
        match self {
            Operation::DecimalToBinary => integer(Some(10), Some(2)),
            Operation::BinaryToDecimal => integer(Some(2), Some(10)),
            Operation::DecimalToOctal => integer(Some(10), Some(8)),
            Operation::OctalToDecimal => integer(Some(8), Some(10)),
            Operation::DecimalToHex => integer(Some(10), Some(16)),
            Operation::HexToDecimal => integer(Some(16), Some(10)),
            Operation::BinaryToOctal => integer(Some(2), Some(8)),
            Operation::OctalToBinary => integer(Some(8), Some(2)),
            Operation::BinaryToHex => integer(Some(2), Some(16)),
            Operation::HexToBinary => integer(Some(16), Some(2)),
            Operation::OctalToHex => integer(Some(8), Some(16)),
            Operation::HexToOctal => integer(Some(16), Some(8)),
            Operation::DecimalToAnyBase => integer(Some(10), None),
            Operation::AnyBaseToDecimal => integer(None, Some(10)),
            Operation::AnyBaseToAnyBase => integer(None, None),
            Operation::DecimalFloatToAnyBase => OperationKind::DecimalFloat,
            Operation::CodePointToChar => OperationKind::CodePointToChar,
            Operation::CharToCodePoint => OperationKind::CharToCodePoint,
            Operation::DetectBase => OperationKind::DetectBase,
            Operation::ToggleTheme => OperationKind::ToggleTheme,
            Operation::Quit => OperationKind::Quit,
        }
    }

    /// Menu heading. Quit is listed on its own and has no group.
    pub fn group(&self) -> Option<MenuGroup> {
        match self.kind() {
            OperationKind::Quit => None,
            OperationKind::Integer {
                from: Some(from),
                to: Some(to),
            } => Some(match (from, to) {
                (10, _) | (_, 10) => MenuGroup::Decimal,
                (2, _) => MenuGroup::Binary,
                (8, _) => MenuGroup::Octal,
                _ => MenuGroup::Hexadecimal,
            }),
            _ => Some(MenuGroup::Advanced),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_menu_choice(s).ok_or_else(|| {
            format!(
                "Invalid choice '{}'. Please enter a number between 1 and {}.",
                s.trim(),
                Operation::ALL.len()
            )
        })
    }
}
