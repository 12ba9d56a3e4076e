//! Pretty-printing in whichever flavor [`crate::symbols::current_flavor`]
//! currently selects.

use super::Expression;
use crate::symbols::active_lexemes;
use std::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lex = active_lexemes();
        match self {
            Expression::Var(v) => write!(f, "{v}"),
            Expression::App(fun, args) => {
                if wrap_application_head(fun) {
                    write!(f, "{}{}{}", lex.open, fun, lex.close)?;
                } else {
                    write!(f, "{fun}")?;
                }
                write!(f, "{}", lex.open)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", lex.comma)?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "{}", lex.close)
            }
            Expression::Lambda(v, body) => write!(f, "{}{v}{}{body}", lex.lambda, lex.dot),
            Expression::Exists(v, body) => write!(f, "{} {v}{}{body}", lex.exists, lex.dot),
            Expression::ForAll(v, body) => write!(f, "{} {v}{}{body}", lex.forall, lex.dot),
            Expression::Not(body) => write!(f, "{}{body}", lex.not),
            Expression::And(l, r) => write!(f, "{}{l} {} {r}{}", lex.open, lex.and, lex.close),
            Expression::Or(l, r) => write!(f, "{}{l} {} {r}{}", lex.open, lex.or, lex.close),
            Expression::Imp(l, r) => write!(f, "{}{l} {} {r}{}", lex.open, lex.imp, lex.close),
            Expression::Iff(l, r) => write!(f, "{}{l} {} {r}{}", lex.open, lex.iff, lex.close),
            Expression::Eq(l, r) => write!(f, "{}{l} {} {r}{}", lex.open, lex.eq, lex.close),
        }
    }
}

/// Wrap an application's function position in parens when
/// printing it bare would be ambiguous — an `App` head always needs
/// parens; a `Lambda` head needs them only when its body is itself an
/// application whose function isn't a bare `Var`, or when its body isn't a
/// boolean connective.
fn wrap_application_head(fun: &Expression) -> bool {
    match fun {
        Expression::App(..) => true,
        Expression::Lambda(_, body) => match &**body {
            Expression::App(inner_fun, _) => !matches!(**inner_fun, Expression::Var(_)),
            other => !other.is_boolean(),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{set_flavor, Flavor};

    #[test]
    fn prints_predicate_application() {
        set_flavor(Flavor::Symbolic);
        let e = Expression::app(Expression::var("man"), vec![Expression::var("x")]);
        assert_eq!(e.to_string(), "man(x)");
    }

    #[test]
    fn prints_negation_without_parens() {
        set_flavor(Flavor::Symbolic);
        let e = Expression::Not(Box::new(Expression::app(
            Expression::var("man"),
            vec![Expression::var("x")],
        )));
        assert_eq!(e.to_string(), "-man(x)");
    }

    #[test]
    fn prints_lambda_and_quantifiers() {
        use crate::fresh::Symbol;
        set_flavor(Flavor::Symbolic);
        let lam = Expression::Lambda(
            Symbol::intern("x"),
            Box::new(Expression::app(Expression::var("man"), vec![Expression::var("x")])),
        );
        assert_eq!(lam.to_string(), "\\x.man(x)");

        let ex = Expression::Exists(
            Symbol::intern("x"),
            Box::new(Expression::app(Expression::var("man"), vec![Expression::var("x")])),
        );
        assert_eq!(ex.to_string(), "exists x.man(x)");
    }

    #[test]
    fn prints_boolean_connective_with_outer_parens() {
        set_flavor(Flavor::Symbolic);
        let e = Expression::And(Box::new(Expression::var("a")), Box::new(Expression::var("b")));
        assert_eq!(e.to_string(), "(a & b)");
    }

    #[test]
    fn legacy_flavor_uses_word_operators() {
        set_flavor(Flavor::Legacy);
        let e = Expression::And(Box::new(Expression::var("a")), Box::new(Expression::var("b")));
        assert_eq!(e.to_string(), "(a and b)");
        set_flavor(Flavor::Symbolic);
    }
}
