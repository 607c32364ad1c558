/// CTL formulas
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    True,
    False,
    /// Atomic proposition
    Atom(String),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Equivalence(Box<Formula>, Box<Formula>),
    EX(Box<Formula>),
    AX(Box<Formula>),
    EG(Box<Formula>),
    AG(Box<Formula>),
    EF(Box<Formula>),
    AF(Box<Formula>),
    EU(Box<Formula>, Box<Formula>),
    AU(Box<Formula>, Box<Formula>),
}

/// Variant tag of every non-atomic formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    Equivalence,
    EX,
    AX,
    EG,
    AG,
    EF,
    AF,
    EU,
    AU,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    Unary,
    Binary,
}

/// Display symbol of an operator
pub const fn symbol_of(op: Operator) -> &'static str {
    match op {
        Operator::True => "T",
        Operator::False => "F",
        Operator::Not => "-",
        Operator::And => "&",
        Operator::Or => "|",
        Operator::Implies => "=>",
        Operator::Equivalence => "<=>",
        Operator::EX => "EX",
        Operator::AX => "AX",
        Operator::EG => "EG",
        Operator::AG => "AG",
        Operator::EF => "EF",
        Operator::AF => "AF",
        Operator::EU => "EU",
        Operator::AU => "AU",
    }
}

impl Operator {
    pub const fn symbol(self) -> &'static str {
        symbol_of(self)
    }

    pub const fn arity(self) -> Arity {
        match self {
            Operator::True | Operator::False => Arity::Nullary,
            Operator::Not
            | Operator::EX
            | Operator::AX
            | Operator::EG
            | Operator::AG
            | Operator::EF
            | Operator::AF => Arity::Unary,
            Operator::And
            | Operator::Or
            | Operator::Implies
            | Operator::Equivalence
            | Operator::EU
            | Operator::AU => Arity::Binary,
        }
    }

    /// Whether the operator belongs to the minimal basis {-, &, |, EX, EU, AU} (constants included)
    pub const fn is_basis(self) -> bool {
        !matches!(
            self,
            Operator::Implies
                | Operator::Equivalence
                | Operator::AX
                | Operator::EG
                | Operator::AG
                | Operator::EF
                | Operator::AF
        )
    }
}

/// Borrowed view of a formula node, grouping variants by arity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    Constant(Operator),
    Atom(&'a str),
    Unary(Operator, &'a Formula),
    Binary(Operator, &'a Formula, &'a Formula),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn not(f: impl Into<Formula>) -> Self {
        Formula::Not(Box::new(f.into()))
    }

    pub fn and(l: impl Into<Formula>, r: impl Into<Formula>) -> Self {
        Formula::And(Box::new(l.into()), Box::new(r.into()))
    }

    pub fn or(l: impl Into<Formula>, r: impl Into<Formula>) -> Self {
        Formula::Or(Box::new(l.into()), Box::new(r.into()))
    }

    pub fn implies(l: impl Into<Formula>, r: impl Into<Formula>) -> Self {
        Formula::Implies(Box::new(l.into()), Box::new(r.into()))
    }

    pub fn equivalence(l: impl Into<Formula>, r: impl Into<Formula>) -> Self {
        Formula::Equivalence(Box::new(l.into()), Box::new(r.into()))
    }

    pub fn ex(f: impl Into<Formula>) -> Self {
        Formula::EX(Box::new(f.into()))
    }

    pub fn ax(f: impl Into<Formula>) -> Self {
        Formula::AX(Box::new(f.into()))
    }

    pub fn eg(f: impl Into<Formula>) -> Self {
        Formula::EG(Box::new(f.into()))
    }

    pub fn ag(f: impl Into<Formula>) -> Self {
        Formula::AG(Box::new(f.into()))
    }

    pub fn ef(f: impl Into<Formula>) -> Self {
        Formula::EF(Box::new(f.into()))
    }

    pub fn af(f: impl Into<Formula>) -> Self {
        Formula::AF(Box::new(f.into()))
    }

    pub fn eu(l: impl Into<Formula>, r: impl Into<Formula>) -> Self {
        Formula::EU(Box::new(l.into()), Box::new(r.into()))
    }

    pub fn au(l: impl Into<Formula>, r: impl Into<Formula>) -> Self {
        Formula::AU(Box::new(l.into()), Box::new(r.into()))
    }

    /// Build a unary node from its tag. Returns None if `op` is not unary.
    pub fn unary(op: Operator, f: Formula) -> Option<Self> {
        let f = Box::new(f);
        Some(match op {
            Operator::Not => Formula::Not(f),
            Operator::EX => Formula::EX(f),
            Operator::AX => Formula::AX(f),
            Operator::EG => Formula::EG(f),
            Operator::AG => Formula::AG(f),
            Operator::EF => Formula::EF(f),
            Operator::AF => Formula::AF(f),
            _ => return None,
        })
    }

    /// Build a binary node from its tag. Returns None if `op` is not binary.
    pub fn binary(op: Operator, l: Formula, r: Formula) -> Option<Self> {
        let (l, r) = (Box::new(l), Box::new(r));
        Some(match op {
            Operator::And => Formula::And(l, r),
            Operator::Or => Formula::Or(l, r),
            Operator::Implies => Formula::Implies(l, r),
            Operator::Equivalence => Formula::Equivalence(l, r),
            Operator::EU => Formula::EU(l, r),
            Operator::AU => Formula::AU(l, r),
            _ => return None,
        })
    }

    /// Tag of the node, None for atoms
    pub fn operator(&self) -> Option<Operator> {
        match self.shape() {
            Shape::Atom(_) => None,
            Shape::Constant(op) | Shape::Unary(op, _) | Shape::Binary(op, _, _) => Some(op),
        }
    }

    pub fn shape(&self) -> Shape<'_> {
        match self {
            Formula::True => Shape::Constant(Operator::True),
            Formula::False => Shape::Constant(Operator::False),
            Formula::Atom(name) => Shape::Atom(name),
            Formula::Not(f) => Shape::Unary(Operator::Not, f),
            Formula::EX(f) => Shape::Unary(Operator::EX, f),
            Formula::AX(f) => Shape::Unary(Operator::AX, f),
            Formula::EG(f) => Shape::Unary(Operator::EG, f),
            Formula::AG(f) => Shape::Unary(Operator::AG, f),
            Formula::EF(f) => Shape::Unary(Operator::EF, f),
            Formula::AF(f) => Shape::Unary(Operator::AF, f),
            Formula::And(l, r) => Shape::Binary(Operator::And, l, r),
            Formula::Or(l, r) => Shape::Binary(Operator::Or, l, r),
            Formula::Implies(l, r) => Shape::Binary(Operator::Implies, l, r),
            Formula::Equivalence(l, r) => Shape::Binary(Operator::Equivalence, l, r),
            Formula::EU(l, r) => Shape::Binary(Operator::EU, l, r),
            Formula::AU(l, r) => Shape::Binary(Operator::AU, l, r),
        }
    }

    /// Number of nodes satisfying `pred`
    pub fn count_where<F>(&self, pred: &F) -> usize
    where
        F: Fn(&Formula) -> bool,
    {
        let own = usize::from(pred(self));
        own + match self.shape() {
            Shape::Constant(_) | Shape::Atom(_) => 0,
            Shape::Unary(_, f) => f.count_where(pred),
            Shape::Binary(_, l, r) => l.count_where(pred) + r.count_where(pred),
        }
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.count_where(&|_: &Formula| true)
    }

    pub fn depth(&self) -> usize {
        match self.shape() {
            Shape::Constant(_) | Shape::Atom(_) => 1,
            Shape::Unary(_, f) => 1 + f.depth(),
            Shape::Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of EF, AF, EG, AG, AX, Implies and Equivalence nodes
    pub fn derived_count(&self) -> usize {
        self.count_where(&|f: &Formula| f.operator().is_some_and(|op| !op.is_basis()))
    }

    /// Number of Implies and Equivalence nodes
    pub fn implication_count(&self) -> usize {
        self.count_where(&|f: &Formula| {
            matches!(f, Formula::Implies(..) | Formula::Equivalence(..))
        })
    }

    pub fn is_minimal_basis(&self) -> bool {
        self.derived_count() == 0
    }
}

impl From<&str> for Formula {
    fn from(name: &str) -> Self {
        Formula::Atom(name.to_owned())
    }
}

impl From<String> for Formula {
    fn from(name: String) -> Self {
        Formula::Atom(name)
    }
}
