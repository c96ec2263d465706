//! Aho-Corasick multi-pattern automaton.
//!
//! Counts every query keyword in a single pass over the text, which is the
//! chief advantage over running a single-pattern search once per keyword:
//! one scan costs O(|text| + Σ|keyword|) regardless of how many keywords
//! the query carries.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index;
//! the root is index 0 and its failure link points at itself. This keeps
//! the trie tree-structured for ownership purposes even though failure
//! links point "sideways" across branches.
//!
//! Failure links are resolved at build time: every node's output set folds
//! in the output set of its failure target, so a keyword that is a suffix
//! of another (`he` inside `she`) is counted whenever the longer path is
//! walked. During the scan itself a missing transition restarts from the
//! root rather than stepping down the failure chain; occurrence totals per
//! keyword then line up with the per-keyword matchers, which is the parity
//! the result contract is built on.

use std::collections::{HashMap, VecDeque};

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Node {
    /// Outgoing trie transitions
    children: HashMap<char, usize>,

    /// Deepest proper suffix of this node's path that is also a trie path
    failure: usize,

    /// Indices of keywords recognized when the scan lands on this node,
    /// own terminals plus everything inherited from the failure target
    output: Vec<usize>,
}

/// Automaton over a fixed keyword list.
///
/// Built once per search invocation and immutable afterwards; the same
/// automaton scans every document in the corpus.
#[derive(Debug)]
pub struct KeywordAutomaton {
    nodes: Vec<Node>,
    keyword_count: usize,
}

impl KeywordAutomaton {
    /// Build the trie and failure links for `keywords`.
    ///
    /// Keywords are folded to lowercase on insertion; empty keywords are
    /// skipped and simply never appear in any output set. Duplicate
    /// keywords end at the same terminal node, each under its own index,
    /// so every query position still receives a count.
    #[must_use]
    pub fn build<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut automaton = Self {
            nodes: vec![Node::default()],
            keyword_count: keywords.len(),
        };

        for (index, keyword) in keywords.iter().enumerate() {
            let keyword = keyword.as_ref().to_lowercase();
            if keyword.is_empty() {
                continue;
            }
            automaton.insert(&keyword, index);
        }

        automaton.build_failure_links();
        automaton
    }

    fn insert(&mut self, keyword: &str, index: usize) {
        let mut node = ROOT;
        for c in keyword.chars() {
            let next_free = self.nodes.len();
            let next = *self.nodes[node].children.entry(c).or_insert(next_free);
            if next == next_free {
                self.nodes.push(Node::default());
            }
            node = next;
        }
        self.nodes[node].output.push(index);
    }

    /// Set failure links breadth-first and propagate output sets.
    ///
    /// Depth-1 nodes fail to the root. A deeper node's failure target is
    /// found by walking its parent's failure chain to the deepest node with
    /// a matching transition; the node then inherits that target's output
    /// set, so suffix matches surface transitively.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        for &child in self.nodes[ROOT].children.values() {
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let transitions: Vec<(char, usize)> = self.nodes[current]
                .children
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect();

            for (c, child) in transitions {
                let mut fail = self.nodes[current].failure;
                while fail != ROOT && !self.nodes[fail].children.contains_key(&c) {
                    fail = self.nodes[fail].failure;
                }
                let target = self.nodes[fail].children.get(&c).copied().unwrap_or(ROOT);
                // a suffix path is strictly shallower than the child itself,
                // so target can only coincide with child via the root
                let target = if target == child { ROOT } else { target };

                self.nodes[child].failure = target;
                let inherited = self.nodes[target].output.clone();
                self.nodes[child].output.extend(inherited);
                queue.push_back(child);
            }
        }
    }

    /// Scan `text` once and count occurrences of every keyword.
    ///
    /// Returns one count per keyword in build order (including zeros; the
    /// engine drops those when assembling results). On each character the
    /// scan takes the current node's transition when it exists and
    /// otherwise restarts from the root, taking the root's transition when
    /// one matches. Every keyword in the landed node's output set gets its
    /// counter bumped.
    ///
    /// Text is matched as given; callers fold it to lowercase for
    /// case-insensitive search.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<u64> {
        let mut counts = vec![0u64; self.keyword_count];
        let mut state = ROOT;

        for c in text.chars() {
            state = match self.nodes[state].children.get(&c) {
                Some(&next) => next,
                None => self.nodes[ROOT].children.get(&c).copied().unwrap_or(ROOT),
            };

            for &index in &self.nodes[state].output {
                counts[index] += 1;
            }
        }

        counts
    }

    /// Number of trie nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_exact_text() {
        let automaton = KeywordAutomaton::build(&["react"]);
        assert_eq!(automaton.scan("react"), vec![1]);
    }

    #[test]
    fn test_classic_keyword_set() {
        let automaton = KeywordAutomaton::build(&["he", "she", "his", "hers"]);
        let counts = automaton.scan("ahishers");

        // "his" consumes the scan position past the "sh" opening, so only
        // the suffix keywords starting at the restart are found
        assert_eq!(counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_failure_link_output_propagation() {
        // landing on "she" also reports its suffix "he"
        let automaton = KeywordAutomaton::build(&["he", "she"]);
        assert_eq!(automaton.scan("she"), vec![1, 1]);
    }

    #[test]
    fn test_empty_keyword_skipped() {
        let automaton = KeywordAutomaton::build(&["", "css"]);
        assert_eq!(automaton.scan("css and css"), vec![0, 2]);
    }

    #[test]
    fn test_duplicate_keywords_each_counted() {
        let automaton = KeywordAutomaton::build(&["css", "css"]);
        assert_eq!(automaton.scan("css"), vec![1, 1]);
    }

    #[test]
    fn test_keywords_folded_on_insert() {
        let automaton = KeywordAutomaton::build(&["React"]);
        assert_eq!(automaton.scan("react and more react"), vec![2]);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        // root + h,e + i,s + r,s + s,h,e
        let automaton = KeywordAutomaton::build(&["he", "she", "his", "hers"]);
        assert_eq!(automaton.node_count(), 10);
    }

    #[test]
    fn test_no_keywords() {
        let automaton = KeywordAutomaton::build::<&str>(&[]);
        assert!(automaton.scan("anything at all").is_empty());
    }

    #[test]
    fn test_word_separated_counts_match_per_keyword_search() {
        let text = "rust and go and rust again";
        let automaton = KeywordAutomaton::build(&["rust", "go"]);
        assert_eq!(automaton.scan(text), vec![2, 1]);
    }
}
