use std::fmt;

/// Precedence level. Larger binds tighter.
pub type Prec = u16;

/// Whether an operator takes an argument on the left and/or on the right.
///
/// - `_ + _` takes an argument on both sides, so it is `Infix`.
/// - `~ _` (negation) takes an argument only on the right, so it is `Prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
}

/// Whether an operator is left or right associative. For example:
///
/// - Subtraction is left associative because `0 - 10 - 1` is equal to `(0 - 10) - 1 = -11` rather
///   than `0 - (10 - 1) = -9`.
/// - Exponentiation is right associative: `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2) = 512`, not `(2 ^ 3) ^ 2 =
///   64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assoc {
    Left,
    Right,
}

/// One of the arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Unary negation. Written `~`, or `-` in a position where an operand is expected.
    Neg,
}

/// Look up the precedence and associativity of an operator symbol. Returns `None` for anything
/// that isn't one of the known operators.
pub fn precedence_of(symbol: &str) -> Option<(Prec, Assoc)> {
    Operator::from_symbol(symbol).map(|op| (op.prec(), op.assoc()))
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Neg,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        use Operator::*;

        match symbol {
            "+" => Some(Add),
            "-" => Some(Sub),
            "*" => Some(Mul),
            "/" => Some(Div),
            "^" => Some(Pow),
            "~" => Some(Neg),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        use Operator::*;

        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Neg => "~",
        }
    }

    pub fn prec(self) -> Prec {
        use Operator::*;

        match self {
            Neg => 5,
            Pow => 4,
            Mul | Div => 3,
            Add | Sub => 2,
        }
    }

    pub fn assoc(self) -> Assoc {
        use Operator::*;

        match self {
            Pow | Neg => Assoc::Right,
            Add | Sub | Mul | Div => Assoc::Left,
        }
    }

    pub fn fixity(self) -> Fixity {
        match self {
            Operator::Neg => Fixity::Prefix,
            _ => Fixity::Infix,
        }
    }

    /// How many operands this operator consumes.
    pub fn arity(self) -> usize {
        match self.fixity() {
            Fixity::Prefix => 1,
            Fixity::Infix => 2,
        }
    }

    /// Whether `self`, sitting on top of the operator stack, must be output before `incoming` is
    /// pushed.
    pub(crate) fn yields_to(self, incoming: Operator) -> bool {
        if incoming.fixity() == Fixity::Prefix {
            return false;
        }
        self.prec() > incoming.prec()
            || (self.prec() == incoming.prec()
                && self.assoc() == Assoc::Left
                && incoming.assoc() == Assoc::Left)
    }

    /// Apply an infix operator. Division follows IEEE semantics: `1 / 0` is infinity and `0 / 0` is
    /// NaN. `None` if `self` is a prefix operator.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        use Operator::*;

        match self {
            Add => Some(left + right),
            Sub => Some(left - right),
            Mul => Some(left * right),
            Div => Some(left / right),
            Pow => Some(left.powf(right)),
            Neg => None,
        }
    }

    /// Apply a prefix operator. `None` if `self` is an infix operator.
    pub fn apply_unary(self, arg: f64) -> Option<f64> {
        match self {
            Operator::Neg => Some(-arg),
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
