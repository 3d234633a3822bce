use rand::Rng;
use std::fmt;

pub const MIN_OPERAND: i32 = 3;
pub const MAX_OPERAND: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
}

pub const OPERATORS: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

impl Operator {
    pub fn apply(self, left: i32, right: i32) -> i32 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
        }
    }
}

/// A single two-operand question, e.g. `7 * 4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    left: i32,
    right: i32,
    operator: Operator,
    expression: String,
    answer: i32,
}

impl Problem {
    pub fn new(left: i32, operator: Operator, right: i32) -> Self {
        Self {
            left,
            right,
            operator,
            expression: format!("{left} {operator} {right}"),
            answer: operator.apply(left, right),
        }
    }

    /// Draw both operands and the operator uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let left = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
        let right = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
        let operator = OPERATORS[rng.gen_range(0..OPERATORS.len())];
        Self::new(left, operator, right)
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn answer(&self) -> i32 {
        self.answer
    }

    /// A guess counts only when it is literally the decimal answer, no trimming or parsing
    pub fn is_solved_by(&self, guess: &str) -> bool {
        guess == self.answer.to_string()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
