//! The theorem-prover bridge: named by interface only. Nothing in this
//! crate actually proves anything — `TheoremProver` names the seam an
//! external prover plugs into, and the registry below is how a caller
//! looks one up by name.

use crate::error::EngineError;
use crate::expr::Expression;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// An external decision procedure over formulas.
///
/// `prove` answers whether `expr` is a theorem. This crate never implements
/// one; it only defines where a caller's implementation attaches.
pub trait TheoremProver: Send + Sync {
    fn name(&self) -> &str;
    fn prove(&self, expr: &Expression) -> bool;
}

fn registry() -> &'static RwLock<HashMap<String, Arc<dyn TheoremProver>>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<dyn TheoremProver>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register a prover under its own `name()`, replacing any prover
/// previously registered under that name.
pub fn register(prover: Arc<dyn TheoremProver>) {
    registry()
        .write()
        .unwrap()
        .insert(prover.name().to_string(), prover);
}

/// Remove every registered prover. Mostly useful for tests.
pub fn clear_registry() {
    registry().write().unwrap().clear();
}

fn lookup(name: &str) -> Result<Arc<dyn TheoremProver>, EngineError> {
    registry()
        .read()
        .unwrap()
        .get(name)
        .cloned()
        .ok_or_else(|| EngineError::ProverNotFound(name.to_string()))
}

impl Expression {
    /// Ask a registered prover whether `self` and `other` are logically
    /// equivalent, by building `Iff(simplify(self), simplify(other))` and
    /// handing it to the named prover. Returns `EngineError::ProverNotFound`
    /// if no prover is registered under `prover_name` — there is no default
    /// fallback, since this crate ships no prover of its own.
    pub fn tp_equivalent(&self, other: &Expression, prover_name: &str) -> Result<bool, EngineError> {
        let prover = lookup(prover_name)?;
        let goal = Expression::Iff(Box::new(self.simplify()), Box::new(other.simplify()));
        Ok(prover.prove(&goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysTrue;
    impl TheoremProver for AlwaysTrue {
        fn name(&self) -> &str {
            "always-true"
        }
        fn prove(&self, _expr: &Expression) -> bool {
            true
        }
    }

    struct CountsCalls {
        calls: std::sync::atomic::AtomicUsize,
    }
    impl TheoremProver for CountsCalls {
        fn name(&self) -> &str {
            "counter"
        }
        fn prove(&self, expr: &Expression) -> bool {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            matches!(expr, Expression::Iff(..))
        }
    }

    #[test]
    fn unregistered_prover_is_an_error() {
        clear_registry();
        let a = Expression::var("a");
        let b = Expression::var("b");
        assert!(matches!(a.tp_equivalent(&b, "tableau"), Err(EngineError::ProverNotFound(_))));
    }

    #[test]
    fn registered_prover_is_dispatched_with_an_iff_goal() {
        clear_registry();
        register(Arc::new(CountsCalls {
            calls: std::sync::atomic::AtomicUsize::new(0),
        }));
        let a = Expression::var("a");
        let b = Expression::var("b");
        assert!(a.tp_equivalent(&b, "counter").unwrap());
    }

    #[test]
    fn always_true_prover_accepts_anything() {
        clear_registry();
        register(Arc::new(AlwaysTrue));
        let a = Expression::var("a");
        let b = Expression::var("b");
        assert!(a.tp_equivalent(&b, "always-true").unwrap());
    }
}
