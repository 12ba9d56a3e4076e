//! A recursive-descent parser over the token buffer the symbol table
//! produces, normalizing all three concrete syntaxes into one abstract
//! form.
//!
//! Construction of every variant is routed through an [`ExpressionFactory`]
//! (the extensibility hooks): the default factory builds
//! plain [`Expression`]s, but a caller can supply its own to attach
//! provenance or swap in a different AST without touching the grammar.

use crate::error::ParseError;
use crate::expr::Expression;
use crate::fresh::Symbol;
use crate::symbols::{self, LEXEMES};

/// Which boolean/equality connective a binary operator token names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
    Imp,
    Iff,
    Eq,
}

/// Which quantifier a binder token names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantKind {
    Exists,
    ForAll,
}

/// Hook for overriding how the parser builds each AST shape. Default
/// methods build plain [`Expression`]s; override any subset to attach
/// extra data at construction time.
pub trait ExpressionFactory {
    fn make_variable(&self, name: Symbol) -> Expression {
        Expression::Var(name)
    }
    fn make_application(&self, fun: Expression, args: Vec<Expression>) -> Expression {
        Expression::app(fun, args)
    }
    fn make_lambda(&self, var: Symbol, term: Expression) -> Expression {
        Expression::Lambda(var, Box::new(term))
    }
    fn make_quantifier(&self, kind: QuantKind, var: Symbol, term: Expression) -> Expression {
        match kind {
            QuantKind::Exists => Expression::Exists(var, Box::new(term)),
            QuantKind::ForAll => Expression::ForAll(var, Box::new(term)),
        }
    }
    fn make_negation(&self, term: Expression) -> Expression {
        Expression::Not(Box::new(term))
    }
    fn make_boolean(&self, op: BoolOp, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            BoolOp::And => Expression::And(l, r),
            BoolOp::Or => Expression::Or(l, r),
            BoolOp::Imp => Expression::Imp(l, r),
            BoolOp::Iff => Expression::Iff(l, r),
            BoolOp::Eq => Expression::Eq(l, r),
        }
    }
}

/// The default factory: builds plain [`Expression`]s with no extra data.
pub struct DefaultFactory;
impl ExpressionFactory for DefaultFactory {}

/// Whether `expr` is a `Lambda`, or an `App` whose head is transitively a
/// `Lambda` (i.e. was built by applying a lambda term to something, as
/// opposed to calling an uninterpreted predicate symbol).
fn is_lambda_headed(expr: &Expression) -> bool {
    match expr {
        Expression::Lambda(..) => true,
        Expression::App(head, _) => is_lambda_headed(head),
        _ => false,
    }
}

/// Parse a complete expression with the default factory. Trailing input
/// after a complete expression is a [`ParseError::TrailingInput`].
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    Parser::new(input, DefaultFactory).parse_all()
}

/// Cursor-based recursive-descent parser over a tokenized buffer.
pub struct Parser<F: ExpressionFactory> {
    tokens: Vec<String>,
    pos: usize,
    factory: F,
}

impl<F: ExpressionFactory> Parser<F> {
    pub fn new(input: &str, factory: F) -> Self {
        let tokens = symbols::tokenize(input);
        log::debug!("tokenized {:?} into {:?}", input, tokens);
        Parser { tokens, pos: 0, factory }
    }

    fn in_range(&self, offset: usize) -> bool {
        self.pos + offset < self.tokens.len()
    }

    /// Peek `offset` tokens ahead without consuming.
    fn peek(&self, offset: usize) -> Result<&str, ParseError> {
        self.tokens
            .get(self.pos + offset)
            .map(String::as_str)
            .ok_or(ParseError::UnexpectedEnd)
    }

    /// Consume and return the next token, advancing the cursor.
    fn next_token(&mut self) -> Result<String, ParseError> {
        let tok = self.tokens.get(self.pos).cloned().ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect_one_of(&mut self, expected: &[&str]) -> Result<String, ParseError> {
        let tok = self.next_token()?;
        if expected.contains(&tok.as_str()) {
            Ok(tok)
        } else {
            Err(ParseError::UnexpectedTokenExpected {
                found: tok,
                expected: expected.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    fn expect_dot(&mut self) -> Result<(), ParseError> {
        self.expect_one_of(&LEXEMES.dot).map(|_| ())
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        self.expect_one_of(&[LEXEMES.close]).map(|_| ())
    }

    fn expect_variable(&mut self) -> Result<Symbol, ParseError> {
        let tok = self.next_token()?;
        if symbols::is_variable(&tok) {
            Ok(Symbol::intern(&tok))
        } else {
            Err(ParseError::UnexpectedToken { found: tok })
        }
    }

    /// Parse one complete expression and fail on any trailing input.
    pub fn parse_all(&mut self) -> Result<Expression, ParseError> {
        self.pos = 0;
        let result = self.parse_expression()?;
        if self.in_range(0) {
            return Err(ParseError::TrailingInput {
                found: self.peek(0)?.to_string(),
            });
        }
        Ok(result)
    }

    /// `Expression := Atom (BoolOp Expression)?`
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let tok = self.next_token()?;

        if symbols::is_variable(&tok) {
            self.handle_variable(&tok)
        } else if LEXEMES.not.contains(&tok.as_str()) {
            let inner = self.parse_expression()?;
            Ok(self.factory.make_negation(inner))
        } else if LEXEMES.lambda.contains(&tok.as_str()) {
            self.handle_lambda()
        } else if LEXEMES.exists.contains(&tok.as_str()) {
            self.handle_quant(QuantKind::Exists)
        } else if LEXEMES.forall.contains(&tok.as_str()) {
            self.handle_quant(QuantKind::ForAll)
        } else if tok == LEXEMES.open {
            self.handle_open()
        } else {
            Err(ParseError::UnexpectedToken { found: tok })
        }
    }

    /// A variable token either begins an application (`Var '(' ArgList? ')'`)
    /// or stands alone. A fully empty argument list (`f()`) degenerates to
    /// the bare variable, preserving the non-empty-`App.args` invariant.
    fn handle_variable(&mut self, tok: &str) -> Result<Expression, ParseError> {
        let name = Symbol::intern(tok);
        if self.in_range(0) && self.peek(0)? == LEXEMES.open {
            self.next_token()?; // swallow '('
            let mut args = Vec::new();
            if self.peek(0)? != LEXEMES.close {
                args.push(self.parse_expression()?);
                while self.peek(0)? == LEXEMES.comma {
                    self.next_token()?;
                    args.push(self.parse_expression()?);
                }
            }
            self.expect_close()?;
            let expr = if args.is_empty() {
                self.factory.make_variable(name)
            } else {
                self.factory.make_application(self.factory.make_variable(name), args)
            };
            self.attempt_boolean(expr)
        } else {
            self.attempt_boolean(self.factory.make_variable(name))
        }
    }

    /// `Lambda VarList '.' Expression`, with `\x y.M` sugar for `\x.\y.M`
    /// and lambda groups chained by a directly-following lambda token so
    /// `\x.\y.M == \x y.M`.
    fn handle_lambda(&mut self) -> Result<Expression, ParseError> {
        let mut vars = vec![self.expect_variable()?];
        loop {
            while self.in_range(0) && symbols::is_variable(self.peek(0)?) {
                vars.push(self.expect_variable()?);
            }
            self.expect_dot()?;
            if self.in_range(0) && LEXEMES.lambda.contains(&self.peek(0)?) {
                self.next_token()?; // swallow the chained lambda symbol
            } else {
                break;
            }
        }

        let mut accum = self.parse_expression()?;
        while let Some(v) = vars.pop() {
            accum = self.factory.make_lambda(v, accum);
        }

        let accum = self.attempt_application(accum)?;
        self.attempt_boolean(accum)
    }

    /// `Quant VarList '.' Expression`, with the same binder-juxtaposition
    /// sugar as lambdas but no post-binder application.
    fn handle_quant(&mut self, kind: QuantKind) -> Result<Expression, ParseError> {
        let mut vars = vec![self.expect_variable()?];
        while self.in_range(0) && symbols::is_variable(self.peek(0)?) {
            vars.push(self.expect_variable()?);
        }
        self.expect_dot()?;

        let mut accum = self.parse_expression()?;
        while let Some(v) = vars.pop() {
            accum = self.factory.make_quantifier(kind, v, accum);
        }
        self.attempt_boolean(accum)
    }

    /// `'(' Expression ')' (Application)*`
    fn handle_open(&mut self) -> Result<Expression, ParseError> {
        let inner = self.parse_expression()?;
        let inner = self.attempt_boolean(inner)?;
        self.expect_close()?;
        self.attempt_application(inner)
    }

    /// Right-associative by construction: after any atom, a boolean or
    /// equality operator consumes the rest of the input as the right-hand
    /// side. There's no precedence among connectives — mixed operators
    /// must be parenthesized by the user.
    fn attempt_boolean(&mut self, expr: Expression) -> Result<Expression, ParseError> {
        if !self.in_range(0) {
            return Ok(expr);
        }
        let op = match self.peek(0)? {
            t if LEXEMES.and.contains(&t) => BoolOp::And,
            t if LEXEMES.or.contains(&t) => BoolOp::Or,
            t if LEXEMES.imp.contains(&t) => BoolOp::Imp,
            t if LEXEMES.iff.contains(&t) => BoolOp::Iff,
            t if LEXEMES.eq.contains(&t) => BoolOp::Eq,
            _ => return Ok(expr),
        };
        self.next_token()?; // swallow the operator
        let rhs = self.parse_expression()?;
        Ok(self.factory.make_boolean(op, expr, rhs))
    }

    /// Application binds tighter than boolean operators: immediately after
    /// a `Lambda`, or an `App` whose head is (transitively) a `Lambda`, a
    /// parenthesized argument list is consumed and successive `(...)`
    /// groups chain as curried application. A bare predicate call such as
    /// `P(x)` is an `App`, but its head is a plain `Var`, not a `Lambda`;
    /// applying it further — directly (`P(x)(y)`) or through a redundant
    /// wrapping paren (`(P(x))(y)`) — is a parse error, since nothing about
    /// an uninterpreted predicate symbol makes it a function. An empty
    /// argument list is a no-op, matching `handle_variable`'s zero-arity
    /// degeneration.
    fn attempt_application(&mut self, expr: Expression) -> Result<Expression, ParseError> {
        if !self.in_range(0) || self.peek(0)? != LEXEMES.open {
            return Ok(expr);
        }
        if !is_lambda_headed(&expr) {
            return Err(ParseError::NotApplicable {
                head: expr.to_string(),
            });
        }
        self.next_token()?; // swallow '('
        let mut accum = expr;
        if self.peek(0)? != LEXEMES.close {
            let first = self.parse_expression()?;
            accum = self.factory.make_application(accum, vec![first]);
            while self.peek(0)? == LEXEMES.comma {
                self.next_token()?;
                let next = self.parse_expression()?;
                accum = self.factory.make_application(accum, vec![next]);
            }
        }
        self.expect_close()?;
        self.attempt_application(accum)
    }
}
