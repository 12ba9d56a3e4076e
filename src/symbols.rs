//! Symbol table and longest-match tokenizer.
//!
//! Three interchangeable surface syntaxes ("flavors") share one abstract
//! form. [`LEXEMES`] lists, for each flavor, the lexeme that spells a given
//! operator; [`reserved_tokens`] is the union across all three, used by the
//! parser to decide whether a token names a variable. [`insert_symbols`]
//! performs the longest-match whitespace insertion described by the symbol
//! table: a `Trie` built once from the union of symbol-like lexemes is
//! walked greedily from each input position.

use bumpalo::Bump;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};

/// Which concrete syntax the pretty-printer currently emits.
///
/// Parsing always accepts the union of all three; only printing is
/// flavor-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Flavor {
    /// The original word-based form: `and`, `or`, `some`, `all`.
    Legacy,
    /// The symbolic form: `&`, `|`, `->`, `<->`.
    Symbolic,
    /// The theorem-prover-compatible form (shares symbolic operators).
    Prover,
}

impl Flavor {
    fn index(self) -> usize {
        match self {
            Flavor::Legacy => 0,
            Flavor::Symbolic => 1,
            Flavor::Prover => 2,
        }
    }
}

static CURRENT_FLAVOR: AtomicU8 = AtomicU8::new(1); // Symbolic by default.

/// Read the process-wide flavor used by `Display` impls.
pub fn current_flavor() -> Flavor {
    match CURRENT_FLAVOR.load(Ordering::Relaxed) {
        0 => Flavor::Legacy,
        2 => Flavor::Prover,
        _ => Flavor::Symbolic,
    }
}

/// Select the flavor used by `Display` impls from now on.
pub fn set_flavor(flavor: Flavor) {
    CURRENT_FLAVOR.store(flavor.index() as u8, Ordering::Relaxed);
}

/// Per-flavor lexeme spellings, indexed `[Legacy, Symbolic, Prover]`.
pub struct Lexemes {
    pub lambda: [&'static str; 3],
    pub exists: [&'static str; 3],
    pub forall: [&'static str; 3],
    pub dot: [&'static str; 3],
    pub open: &'static str,
    pub close: &'static str,
    pub comma: &'static str,
    pub not: [&'static str; 3],
    pub and: [&'static str; 3],
    pub or: [&'static str; 3],
    pub imp: [&'static str; 3],
    pub iff: [&'static str; 3],
    pub eq: [&'static str; 3],
}

pub static LEXEMES: Lexemes = Lexemes {
    lambda: ["\\", "\\", "\\"],
    exists: ["some", "exists", "exists"],
    forall: ["all", "all", "all"],
    dot: [".", ".", " "],
    open: "(",
    close: ")",
    comma: ",",
    not: ["not", "-", "-"],
    and: ["and", "&", "&"],
    or: ["or", "|", "|"],
    imp: ["implies", "->", "->"],
    iff: ["iff", "<->", "<->"],
    eq: ["=", "=", "="],
};

impl Lexemes {
    fn for_flavor(&self, flavor: Flavor) -> FlavorLexemes {
        let i = flavor.index();
        FlavorLexemes {
            lambda: self.lambda[i],
            exists: self.exists[i],
            forall: self.forall[i],
            dot: self.dot[i],
            open: self.open,
            close: self.close,
            comma: self.comma,
            not: self.not[i],
            and: self.and[i],
            or: self.or[i],
            imp: self.imp[i],
            iff: self.iff[i],
            eq: self.eq[i],
        }
    }
}

/// The lexemes active for one flavor, handed to the pretty-printer.
pub struct FlavorLexemes {
    pub lambda: &'static str,
    pub exists: &'static str,
    pub forall: &'static str,
    pub dot: &'static str,
    pub open: &'static str,
    pub close: &'static str,
    pub comma: &'static str,
    pub not: &'static str,
    pub and: &'static str,
    pub or: &'static str,
    pub imp: &'static str,
    pub iff: &'static str,
    pub eq: &'static str,
}

/// Lexemes for the currently selected flavor.
pub fn active_lexemes() -> FlavorLexemes {
    LEXEMES.for_flavor(current_flavor())
}

/// Every lexeme across all three flavors. A token not in this set is a
/// variable: a token is a variable if and only if it is not one of the
/// reserved lexemes (across all flavors).
pub fn reserved_tokens() -> &'static [&'static str] {
    static TOKENS: &[&str] = &[
        "and", "&", "or", "|", "implies", "->", "iff", "<->", "=", "some", "exists", "all", "\\",
        ".", "(", ")", ",", "not", "-",
    ];
    TOKENS
}

pub fn is_variable(token: &str) -> bool {
    !reserved_tokens().contains(&token)
}

/// The lexemes inserted into the raw input before whitespace splitting.
///
/// Word lexemes like
/// `and`/`exists` are already whitespace-delimited by convention and don't
/// need insertion; only the punctuation and symbolic-operator spellings do.
fn symbol_lexemes() -> &'static [&'static str] {
    static SYMBOLS: &[&str] = &[
        "\\", ".", "(", ")", ",", "&", "|", "-", "->", "<->", "=",
    ];
    SYMBOLS
}

struct TrieNode<'a> {
    children: &'a [(char, &'a TrieNode<'a>)],
}

/// An immutable longest-match trie over a fixed lexeme set.
///
/// Built once from [`symbol_lexemes`] and never mutated again, so nodes are
/// allocated from a `bumpalo::Bump` arena rather than one `Box` per node.
pub struct Trie<'a> {
    root: &'a TrieNode<'a>,
}

impl<'a> Trie<'a> {
    pub fn build(bump: &'a Bump, lexemes: &[&str]) -> Trie<'a> {
        let mut tmp: HashMap<char, TempNode> = HashMap::new();
        for lexeme in lexemes {
            insert_temp(&mut tmp, lexeme.chars());
        }
        Trie {
            root: freeze(bump, tmp),
        }
    }

    /// Walk greedily from the start of `data`, following valid edges for as
    /// long as they exist; returns the matched prefix length (0 if the
    /// first character has no edge at all).
    fn longest_match(&self, data: &str) -> usize {
        let mut node = self.root;
        let mut matched = 0;
        for c in data.chars() {
            match node.children.iter().find(|(ch, _)| *ch == c) {
                Some((_, next)) => {
                    node = next;
                    matched += c.len_utf8();
                }
                None => break,
            }
        }
        matched
    }
}

#[derive(Default)]
struct TempNode {
    children: HashMap<char, TempNode>,
}

fn insert_temp(node_children: &mut HashMap<char, TempNode>, mut chars: std::str::Chars) {
    if let Some(c) = chars.next() {
        insert_temp(&mut node_children.entry(c).or_default().children, chars);
    }
}

fn freeze<'a>(bump: &'a Bump, tmp: HashMap<char, TempNode>) -> &'a TrieNode<'a> {
    let mut entries: Vec<(char, TempNode)> = tmp.into_iter().collect();
    entries.sort_by_key(|(c, _)| *c);
    let children: Vec<(char, &'a TrieNode<'a>)> = entries
        .into_iter()
        .map(|(c, node)| (c, freeze(bump, node.children)))
        .collect();
    bump.alloc(TrieNode {
        children: bump.alloc_slice_copy(&children),
    })
}

/// Insert spaces around every symbol-table lexeme in `data`, then split on
/// whitespace. This lets `man(x)` tokenize to `man`, `(`, `x`, `)` without
/// the caller adding whitespace by hand.
pub fn tokenize(data: &str) -> Vec<String> {
    let bump = Bump::new();
    let trie = Trie::build(&bump, symbol_lexemes());

    let mut out = String::with_capacity(data.len() * 2);
    let mut rest = data;
    while !rest.is_empty() {
        let matched = trie.longest_match(rest);
        if matched > 0 {
            log::trace!("symbol insertion matched {:?}", &rest[..matched]);
            out.push(' ');
            out.push_str(&rest[..matched]);
            out.push(' ');
            rest = &rest[matched..];
        } else {
            let c = rest.chars().next().expect("rest is non-empty");
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out.split_whitespace().map(str::to_owned).collect()
}
