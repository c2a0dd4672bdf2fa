// Index-based token arena over a dependency-annotated sentence.
//
// Head references are plain indices rather than live token references: a
// malformed head graph from the upstream tagger can be cyclic, and indices
// keep navigation bounded and the structure trivially copyable.

use thiserror::Error;

use crate::types::Token;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentenceError {
    #[error("token {index} has head {head} but the sentence has {len} tokens")]
    HeadOutOfRange {
        index: usize,
        head: usize,
        len: usize,
    },
}

/// An immutable, dependency-annotated sentence. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence, clamping out-of-range head indices to the token
    /// itself. Upstream tagger output is expected noise, not an error.
    pub fn new(tokens: Vec<Token>) -> Self {
        let len = tokens.len();
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(i, mut t)| {
                if t.head >= len {
                    t.head = i;
                }
                t
            })
            .collect();
        Self { tokens }
    }

    /// Build a sentence, rejecting out-of-range head indices.
    pub fn try_new(tokens: Vec<Token>) -> Result<Self, SentenceError> {
        let len = tokens.len();
        for (index, t) in tokens.iter().enumerate() {
            if t.head >= len {
                return Err(SentenceError::HeadOutOfRange {
                    index,
                    head: t.head,
                    len,
                });
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Find the first token whose surface text equals `word`
    /// (case-insensitive).
    pub fn find(&self, word: &str) -> Option<usize> {
        let lower = word.to_lowercase();
        self.tokens
            .iter()
            .position(|t| t.text.to_lowercase() == lower)
    }

    /// Head index of a token. A root token is its own head.
    pub fn head_of(&self, index: usize) -> usize {
        self.tokens[index].head
    }

    /// Indices of all tokens whose head is `index` (excluding `index` itself,
    /// so a root is not its own dependent).
    pub fn dependents_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| t.head == index && *i != index)
            .map(|(i, _)| i)
    }

    /// Indices of all tokens with the given coarse POS.
    pub fn indices_with_pos<'a>(&'a self, pos: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.pos == pos)
            .map(|(i, _)| i)
    }

    /// Whether two tokens sit in the same verb group: one heads the other,
    /// they share a head, or `a` is an ancestor of `b` within `hops` steps.
    /// Mere co-occurrence in the sentence does not qualify.
    pub fn syntactically_related(&self, a: usize, b: usize, hops: usize) -> bool {
        if self.head_of(b) == a || self.head_of(a) == b {
            return true;
        }
        if self.head_of(a) == self.head_of(b) {
            return true;
        }
        let mut current = self.head_of(b);
        for _ in 0..hops {
            if current == a {
                return true;
            }
            let next = self.head_of(current);
            if next == current {
                break;
            }
            current = next;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MorphMap;

    fn tok(text: &str, head: usize) -> Token {
        Token {
            text: text.into(),
            lemma: text.to_lowercase(),
            pos: "X".into(),
            tag: String::new(),
            dep: String::new(),
            head,
            morph: MorphMap::new(),
            offset: 0,
        }
    }

    #[test]
    fn test_new_clamps_bad_head() {
        let s = Sentence::new(vec![tok("a", 99), tok("b", 0)]);
        assert_eq!(s.head_of(0), 0, "bad head should clamp to self");
        assert_eq!(s.head_of(1), 0);
    }

    #[test]
    fn test_try_new_rejects_bad_head() {
        let err = Sentence::try_new(vec![tok("a", 5)]).unwrap_err();
        assert_eq!(
            err,
            SentenceError::HeadOutOfRange {
                index: 0,
                head: 5,
                len: 1
            }
        );
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let s = Sentence::new(vec![tok("Haus", 0), tok("ist", 0)]);
        assert_eq!(s.find("haus"), Some(0));
        assert_eq!(s.find("HAUS"), Some(0));
        assert_eq!(s.find("fehlt"), None);
    }

    #[test]
    fn test_dependents_exclude_root_itself() {
        // 0 is root (own head); 1 and 2 depend on 0.
        let s = Sentence::new(vec![tok("geht", 0), tok("er", 0), tok("an", 0)]);
        let deps: Vec<usize> = s.dependents_of(0).collect();
        assert_eq!(deps, vec![1, 2]);
    }

    #[test]
    fn test_syntactically_related_direct_and_sibling() {
        // 1 is root; 0 and 2 depend on 1.
        let s = Sentence::new(vec![tok("er", 1), tok("ist", 1), tok("gegangen", 1)]);
        assert!(s.syntactically_related(1, 2, 2), "head/dependent");
        assert!(s.syntactically_related(0, 2, 2), "siblings share a head");
    }

    #[test]
    fn test_syntactically_related_bounded_hops() {
        // Chain: 3 -> 2 -> 1 -> 0 (root).
        let s = Sentence::new(vec![tok("a", 0), tok("b", 0), tok("c", 1), tok("d", 2)]);
        assert!(s.syntactically_related(1, 3, 2), "ancestor within 2 hops");
        assert!(
            !s.syntactically_related(0, 3, 1),
            "ancestor beyond hop budget must not count"
        );
    }

    #[test]
    fn test_related_terminates_on_cycle() {
        // 0 and 1 head each other; must not loop forever.
        let s = Sentence::new(vec![tok("a", 1), tok("b", 0), tok("c", 2)]);
        assert!(!s.syntactically_related(2, 0, 2));
    }
}
