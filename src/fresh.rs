//! Interned variable names and the process-wide fresh-name counter.
//!
//! Names are interned through a [`lasso::ThreadedRodeo`] (the same pattern
//! cheap equality and a
//! counter-backed `fresh_var`), so `Symbol` equality is an integer compare
//! rather than a string compare, and alpha-conversion's fresh names come
//! from one atomically-incrementing counter shared by every caller.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

fn interner() -> &'static ThreadedRodeo {
    static INTERNER: OnceLock<ThreadedRodeo> = OnceLock::new();
    INTERNER.get_or_init(ThreadedRodeo::new)
}

/// An interned variable or predicate name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(Spur);

impl Symbol {
    pub fn intern(name: &str) -> Symbol {
        Symbol(interner().get_or_intern(name))
    }

    pub fn as_str(&self) -> &'static str {
        interner().resolve(&self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// The next value of the process-wide monotonic counter.
///
/// Never resets within a run; `Ordering::SeqCst` gives every
/// concurrent caller a distinct value, which is all alpha-conversion needs
/// to avoid colliding with another in-flight rename.
fn next() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A variable name guaranteed not to collide with any name this process has
/// handed out before, formed by prefixing `z` to the counter's decimal value
/// Collision with a user-supplied name starting with `z` is
/// possible only in theory, since user names come from the tokenizer and
/// this counter is never reset mid-run.
pub fn fresh_symbol() -> Symbol {
    let id = next();
    log::trace!("allocating fresh variable z{id}");
    Symbol::intern(&format!("z{id}"))
}
