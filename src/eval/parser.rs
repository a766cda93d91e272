//! Recursive-descent parser for normalized expressions.
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary)*
//! unary   := ("-" | "+")+ apply | power
//! power   := apply ("**" unary)?
//! apply   := FUNC "(" expr ")" | FUNC unary | primary
//! primary := NUMBER | CONST | "(" expr ")"
//! ```
//!
//! A signed operand may not be the base of `**`: `-2**2` is rejected and
//! has to be written `(-2)**2` or `-(2**2)`.

use super::error::EvalError;
use super::lexer::{Spanned, Token};
use super::normalize::INTRINSIC_PREFIX;

/// Deepest nesting of parentheses, exponents and prefix calls accepted.
pub const MAX_DEPTH: usize = 256;

/// Named constants reachable through the `math::` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    Euler,
}

impl Constant {
    fn lookup(name: &str) -> Option<Self> {
        match name {
            "PI" => Some(Self::Pi),
            "E" => Some(Self::Euler),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::Euler => std::f64::consts::E,
        }
    }
}

/// Unary functions reachable through the `math::` namespace.
///
/// Trigonometric functions take radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
}

impl Function {
    fn lookup(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log10" => Some(Self::Log10),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
        }
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    Negate(Box<Expr>),
    /// Left-associative run of `+ -` or `* /` operands, kept flat so long
    /// sums do not deepen the tree.
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinaryOp, Expr)>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        function: Function,
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the tree with IEEE-754 semantics.
    ///
    /// NaN and infinities propagate; classifying them is the caller's job.
    pub fn eval(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Constant(c) => c.value(),
            Self::Negate(inner) => -inner.eval(),
            Self::Chain { first, rest } => rest
                .iter()
                .fold(first.eval(), |acc, (op, operand)| op.apply(acc, operand.eval())),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(), rhs.eval()),
            Self::Call { function, arg } => function.apply(arg.eval()),
        }
    }
}

/// An identifier resolved against the intrinsic namespace.
enum Intrinsic {
    Constant(Constant),
    Function(Function),
}

fn resolve(name: &str) -> Result<Intrinsic, EvalError> {
    let unknown = || EvalError::UnknownIdentifier(name.to_string());
    let short = name.strip_prefix(INTRINSIC_PREFIX).ok_or_else(unknown)?;

    if let Some(constant) = Constant::lookup(short) {
        return Ok(Intrinsic::Constant(constant));
    }
    Function::lookup(short)
        .map(Intrinsic::Function)
        .ok_or_else(unknown)
}

pub struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Spanned]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the whole token stream as a single expression.
    pub fn parse(mut self) -> Result<Expr, EvalError> {
        if self.tokens.is_empty() {
            return Err(EvalError::EmptyInput);
        }

        let expr = self.expr()?;

        match self.peek() {
            None => Ok(expr),
            Some(Spanned {
                token: Token::RParen,
                position,
            }) => Err(EvalError::UnbalancedParentheses {
                position: *position,
            }),
            Some(other) => Err(unexpected(other)),
        }
    }

    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Spanned> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().is_some_and(|s| &s.token == expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let first = self.term()?;
        let mut rest = Vec::new();
        loop {
            let op = if self.eat(&Token::Plus) {
                BinaryOp::Add
            } else if self.eat(&Token::Minus) {
                BinaryOp::Sub
            } else {
                return Ok(chain(first, rest));
            };
            rest.push((op, self.term()?));
        }
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let first = self.unary()?;
        let mut rest = Vec::new();
        loop {
            let op = if self.eat(&Token::Star) {
                BinaryOp::Mul
            } else if self.eat(&Token::Slash) {
                BinaryOp::Div
            } else {
                return Ok(chain(first, rest));
            };
            rest.push((op, self.unary()?));
        }
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep { max: MAX_DEPTH });
        }
        self.depth += 1;
        let result = self.signed();
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> Result<Expr, EvalError> {
        let start = self.pos;
        let mut negative = false;
        loop {
            if self.eat(&Token::Minus) {
                negative = !negative;
            } else if !self.eat(&Token::Plus) {
                break;
            }
        }
        if self.pos == start {
            return self.power();
        }

        let operand = self.apply()?;
        if let Some(power) = self.peek().filter(|s| s.token == Token::Power) {
            return Err(unexpected(power));
        }
        Ok(if negative {
            Expr::Negate(Box::new(operand))
        } else {
            operand
        })
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.apply()?;
        if self.eat(&Token::Power) {
            let exponent = self.unary()?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn apply(&mut self) -> Result<Expr, EvalError> {
        let Some(Spanned {
            token: Token::Ident(name),
            ..
        }) = self.peek()
        else {
            return self.primary();
        };

        match resolve(name)? {
            Intrinsic::Constant(constant) => {
                self.pos += 1;
                Ok(Expr::Constant(constant))
            }
            Intrinsic::Function(function) => {
                self.pos += 1;
                let arg = if self.peek().is_some_and(|s| s.token == Token::LParen) {
                    self.group()?
                } else {
                    self.unary()?
                };
                Ok(Expr::Call {
                    function,
                    arg: Box::new(arg),
                })
            }
        }
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            None => Err(EvalError::UnexpectedEnd),
            Some(Spanned {
                token: Token::Number(n),
                ..
            }) => {
                self.pos += 1;
                Ok(Expr::Number(*n))
            }
            Some(Spanned {
                token: Token::LParen,
                ..
            }) => self.group(),
            Some(other) => Err(unexpected(other)),
        }
    }

    /// `"(" expr ")"`, reporting a missing `)` against the opening position.
    fn group(&mut self) -> Result<Expr, EvalError> {
        let open = match self.next() {
            Some(Spanned {
                token: Token::LParen,
                position,
            }) => *position,
            Some(other) => return Err(unexpected(other)),
            None => return Err(EvalError::UnexpectedEnd),
        };

        let inner = self.expr()?;

        match self.next() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => Ok(inner),
            None => Err(EvalError::UnbalancedParentheses { position: open }),
            Some(other) => Err(unexpected(other)),
        }
    }
}

fn chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
    if rest.is_empty() {
        first
    } else {
        Expr::Chain {
            first: Box::new(first),
            rest,
        }
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(spanned: &Spanned) -> EvalError {
    EvalError::UnexpectedToken {
        found: spanned.token.describe(),
        position: spanned.position,
    }
}
