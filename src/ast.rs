use std::fmt;

/// The payload of one expression tree node.
///
/// Constants such as `PI` and `E` are stored as operators with no children;
/// the evaluator tells them apart by tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A numeric literal.
    Number(f64),
    /// An operator or named constant tag, exactly as written in the input.
    /// Unknown tags are kept and rejected only at evaluation time.
    Operator(String),
}

/// A node of an n-ary CPN expression tree.
///
/// Every node owns its children outright. Child order is the order in which
/// the operands appeared in the source, which matters for `-`, `/`, `log`
/// and `dist`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// What this node represents.
    pub element:  Element,
    /// Operand sub-expressions, in source order.
    pub children: Vec<Expr>,
}

impl Expr {
    /// Creates a numeric leaf.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self { element:  Element::Number(value),
               children: Vec::new(), }
    }

    /// Creates an operator node with the given operands.
    ///
    /// # Example
    /// ```
    /// use cpncalc::ast::Expr;
    ///
    /// let sum = Expr::operator("+", vec![Expr::number(1.0), Expr::number(2.0)]);
    /// assert_eq!(sum.to_string(), "(+ 1 2)");
    /// ```
    #[must_use]
    pub fn operator(tag: impl Into<String>, children: Vec<Self>) -> Self {
        Self { element: Element::Operator(tag.into()),
               children }
    }

    /// Creates a bare name such as `PI`, with no operands.
    #[must_use]
    pub fn constant(tag: impl Into<String>) -> Self {
        Self::operator(tag, Vec::new())
    }

    /// Returns the operand at `index`, if present.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    /// Number of operands attached to this node.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.children.len()
    }
}

/// Renders the tree back to CPN. Bare names print without parentheses.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Element::Number(n) => write!(f, "{n}"),
            Element::Operator(tag) if self.children.is_empty() && is_bare_name(tag) => {
                write!(f, "{tag}")
            },
            Element::Operator(tag) => {
                write!(f, "({tag}")?;
                for child in &self.children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Whether a childless operator node can print as a bare identifier.
///
/// A bare name reads back as the same zero-operand node unless it would lex
/// as a number instead.
fn is_bare_name(tag: &str) -> bool {
    tag.parse::<f64>().is_err()
}
