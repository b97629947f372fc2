use std::fmt;

/// Specifies how many operands an operator accepts.
///
/// - `Exact(n)` means exactly `n` operands.
/// - `OneOf(slice)` means any count listed in `slice`.
/// - `AtLeast(n)` means `n` or more operands.
/// - `Any` means the operands are ignored altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
    Any,
}

impl Arity {
    /// Tests whether the given operand count satisfies this arity constraint.
    ///
    /// ```
    /// use cpncalc::interpreter::evaluator::operator::Arity;
    ///
    /// assert!(Arity::OneOf(&[4, 6]).check(6));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::OneOf(arr) => {
                let counts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => write!(f, "any number of"),
        }
    }
}

/// Defines the operator set from a single table.
///
/// Each entry provides:
/// - the enum variant,
/// - the tag as it appears in CPN input,
/// - the accepted operand counts.
///
/// The macro produces:
/// - `Operator` with one variant per entry,
/// - `Operator::from_tag`, `Operator::tag` and `Operator::arity`,
/// - `OPERATOR_TAGS` (public list of every known tag, in table order).
macro_rules! operators {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => {
                tag: $tag:literal,
                arity: $arity:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A recognised operator or named constant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operator {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        pub const OPERATOR_TAGS: &[&str] = &[
            $($tag,)*
        ];

        impl Operator {
            /// Looks up the operator for a tag. Tags are case sensitive.
            #[must_use]
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The tag this operator is written as.
            #[must_use]
            pub const fn tag(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)*
                }
            }

            /// The operand counts this operator accepts.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }
        }
    };
}

operators! {
    /// Sum of all operands.
    Add      => { tag: "+",    arity: Arity::Any },
    /// First operand minus the rest.
    Subtract => { tag: "-",    arity: Arity::AtLeast(1) },
    /// Product of all operands.
    Multiply => { tag: "*",    arity: Arity::Any },
    /// First operand divided by the rest.
    Divide   => { tag: "/",    arity: Arity::AtLeast(1) },
    Sqrt     => { tag: "sqrt", arity: Arity::Exact(1) },
    /// Base-10 logarithm, or logarithm in an explicit base.
    Log      => { tag: "log",  arity: Arity::OneOf(&[1, 2]) },
    Ln       => { tag: "ln",   arity: Arity::Exact(1) },
    Sin      => { tag: "sin",  arity: Arity::Exact(1) },
    Cos      => { tag: "cos",  arity: Arity::Exact(1) },
    Tan      => { tag: "tan",  arity: Arity::Exact(1) },
    /// Distance between two 2-D or 3-D points.
    Dist     => { tag: "dist", arity: Arity::OneOf(&[4, 6]) },
    /// Arithmetic mean of the operands.
    Avg      => { tag: "avg",  arity: Arity::Any },
    /// π; operands are ignored.
    Pi       => { tag: "PI",   arity: Arity::Any },
    /// Euler's number; operands are ignored.
    E        => { tag: "E",    arity: Arity::Any },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips() {
        for tag in OPERATOR_TAGS {
            let op = Operator::from_tag(tag).unwrap();
            assert_eq!(op.tag(), *tag);
        }
    }

    #[test]
    fn unknown_and_miscased_tags() {
        assert_eq!(Operator::from_tag("foo"), None);
        assert_eq!(Operator::from_tag("pi"), None);
        assert_eq!(Operator::from_tag("SQRT"), None);
    }

    #[test]
    fn arity_checks() {
        assert!(Operator::Add.arity().check(0));
        assert!(!Operator::Subtract.arity().check(0));
        assert!(Operator::Subtract.arity().check(5));
        assert!(Operator::Sqrt.arity().check(1));
        assert!(!Operator::Sqrt.arity().check(2));
        assert!(Operator::Log.arity().check(2));
        assert!(!Operator::Log.arity().check(3));
        assert!(!Operator::Dist.arity().check(5));
        assert!(Operator::Pi.arity().check(3));
    }

    #[test]
    fn arity_display() {
        assert_eq!(Arity::OneOf(&[4, 6]).to_string(), "4 or 6");
        assert_eq!(Arity::Exact(1).to_string(), "exactly 1");
    }
}
