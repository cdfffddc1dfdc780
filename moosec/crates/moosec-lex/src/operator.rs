//! The builtin operator table.
//!
//! Each operator spelling maps to an infix binding precedence consumed by a
//! precedence-climbing parser: higher binds tighter. `!` and `~` are
//! prefix-only and carry [`PREFIX_ONLY_PRECEDENCE`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Precedence marking an operator that cannot be used infix.
pub const PREFIX_ONLY_PRECEDENCE: u32 = 999;

macro_rules! builtin_operators {
    ($($variant:ident => $spelling:tt, $precedence:expr;)*) => {
        /// An operator known to the language.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum BuiltinOperator {
            $(
                #[doc = concat!("`", $spelling, "`")]
                #[serde(rename = $spelling)]
                $variant,
            )*
        }

        impl BuiltinOperator {
            /// Every operator, in table order.
            pub const ALL: &'static [BuiltinOperator] = &[$(BuiltinOperator::$variant),*];

            /// The operator's source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(BuiltinOperator::$variant => $spelling,)*
                }
            }

            /// Infix binding precedence, or [`PREFIX_ONLY_PRECEDENCE`].
            pub const fn infix_precedence(self) -> u32 {
                match self {
                    $(BuiltinOperator::$variant => $precedence,)*
                }
            }

            /// Looks up an exact spelling.
            ///
            /// # Example
            ///
            /// ```
            /// use moosec_lex::BuiltinOperator;
            ///
            /// assert_eq!(BuiltinOperator::from_spelling(">>="), Some(BuiltinOperator::RightShiftAssign));
            /// assert_eq!(BuiltinOperator::from_spelling("=>"), None);
            /// ```
            pub fn from_spelling(spelling: &str) -> Option<Self> {
                match spelling {
                    $($spelling => Some(BuiltinOperator::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

builtin_operators! {
    Plus => "+", 140;
    Minus => "-", 140;
    Star => "*", 150;
    Divide => "/", 150;
    Mod => "%", 150;
    Assign => "=", 90;
    EqualTo => "==", 130;
    NotEqualTo => "!=", 130;
    LessThan => "<", 130;
    LessThanOrEqual => "<=", 130;
    GreaterThan => ">", 130;
    GreaterThanOrEqual => ">=", 130;
    And => "&&", 120;
    Or => "||", 110;
    Xor => "^", 140;
    Ampersand => "&", 150;
    BitwiseOr => "|", 140;
    Not => "!", PREFIX_ONLY_PRECEDENCE;
    BitwiseNot => "~", PREFIX_ONLY_PRECEDENCE;
    LeftShift => "<<", 160;
    RightShift => ">>", 160;
    PlusAssign => "+=", 90;
    MinusAssign => "-=", 90;
    TimesAssign => "*=", 90;
    DivideAssign => "/=", 90;
    ModAssign => "%=", 90;
    AndAssign => "&=", 90;
    OrAssign => "|=", 90;
    XorAssign => "^=", 90;
    RightShiftAssign => ">>=", 90;
    LeftShiftAssign => "<<=", 90;
}

impl BuiltinOperator {
    /// Returns true for `!` and `~`.
    #[inline]
    pub const fn is_prefix_only(self) -> bool {
        self.infix_precedence() == PREFIX_ONLY_PRECEDENCE
    }

    /// Returns true for `=` and the compound assignments.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            BuiltinOperator::Assign
                | BuiltinOperator::PlusAssign
                | BuiltinOperator::MinusAssign
                | BuiltinOperator::TimesAssign
                | BuiltinOperator::DivideAssign
                | BuiltinOperator::ModAssign
                | BuiltinOperator::AndAssign
                | BuiltinOperator::OrAssign
                | BuiltinOperator::XorAssign
                | BuiltinOperator::RightShiftAssign
                | BuiltinOperator::LeftShiftAssign
        )
    }
}

/// Error returned when parsing an unknown operator spelling.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator `{0}`")]
pub struct UnknownOperator(pub String);

impl FromStr for BuiltinOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spelling(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for BuiltinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
