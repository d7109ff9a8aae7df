use crate::config::RandomizerConfig;
use crate::core::conflict::ConflictTable;
use crate::core::scanner;
use crate::core::types::{AssignmentMap, Symbol, TokenType};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

// The engine owns the immutable catalogues; every randomization works on
// per-call shuffled copies, so a shared engine is reentrant by construction.
pub struct RandomizerEngine {
    pools: crate::config::SymbolPools,
    conflicts: ConflictTable,
}

impl RandomizerEngine {
    pub fn new() -> Self {
        Self::with_config(RandomizerConfig::default())
    }

    pub fn with_config(config: RandomizerConfig) -> Self {
        Self {
            pools: config.pools,
            conflicts: ConflictTable::new(config.conflict_groups),
        }
    }

    pub fn conflict_table(&self) -> &ConflictTable {
        &self.conflicts
    }

    /// Chooses a symbol for every placeholder token in `text` without
    /// touching the text itself. `preexisting_static`, when supplied,
    /// replaces the engine's own static-symbol extraction; the host driver
    /// uses this to share one committed-symbol set across a front/back pair.
    ///
    /// Greedy first-fit over a shuffled pool copy, per call and per type.
    /// An exhausted pool falls back to its first remaining entry even if it
    /// conflicts; a fully empty pool leaves the token unassigned. A selected
    /// symbol is removed from its pool copy, so no later token in the same
    /// call can reuse it.
    pub fn plan<R: Rng>(
        &self,
        text: &str,
        preexisting_static: Option<&HashSet<Symbol>>,
        rng: &mut R,
    ) -> AssignmentMap {
        let used: Vec<Symbol> = match preexisting_static {
            Some(set) => set.iter().cloned().collect(),
            None => scanner::static_symbols(text).into_iter().collect(),
        };
        self.assign(&scanner::find_tokens(text), used, rng)
    }

    fn assign<R: Rng>(
        &self,
        tokens: &[String],
        mut used: Vec<Symbol>,
        rng: &mut R,
    ) -> AssignmentMap {
        // One shuffled working copy per type, in a fixed type order so a
        // seeded rng reproduces the same draw.
        let mut pools: HashMap<TokenType, Vec<Symbol>> = TokenType::ALL
            .iter()
            .map(|&t| {
                let mut copy = self.pools.pool(t).to_vec();
                copy.shuffle(rng);
                (t, copy)
            })
            .collect();

        let mut map = AssignmentMap::new();
        for token in tokens {
            let pool = match TokenType::from_code(&token[..2]).and_then(|t| pools.get_mut(&t)) {
                Some(pool) => pool,
                // Unrecognized code: best effort, skip rather than abort.
                None => continue,
            };

            let first_fit = pool
                .iter()
                .position(|candidate| !used.iter().any(|u| self.conflicts.conflicts(candidate, u)));

            let symbol = match first_fit {
                Some(i) => pool.remove(i),
                // Pool exhausted: a possibly-confusable symbol still beats
                // leaving the placeholder in the card.
                None if !pool.is_empty() => pool.remove(0),
                None => continue,
            };
            used.push(symbol.clone());
            map.insert(token.clone(), symbol);
        }
        map
    }

    /// Randomizes one text in isolation: plan an assignment, then substitute
    /// every occurrence of every assigned token. Empty input is a no-op.
    pub fn randomize<R: Rng>(
        &self,
        text: &str,
        preexisting_static: Option<&HashSet<Symbol>>,
        rng: &mut R,
    ) -> String {
        if text.is_empty() {
            return String::new();
        }
        let map = self.plan(text, preexisting_static, rng);
        substitute(text, &map)
    }

    /// The host-boundary contract for a card: one committed-symbol set and
    /// one assignment map over front and back together, so a token appearing
    /// on both sides resolves to the same symbol, then each side is
    /// substituted independently.
    pub fn randomize_note<R: Rng>(&self, front: &str, back: &str, rng: &mut R) -> (String, String) {
        let combined = format!("{} {}", front, back);
        let map = self.plan(&combined, None, rng);
        (substitute(front, &map), substitute(back, &map))
    }
}

impl Default for RandomizerEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces every occurrence of every assigned token, longest token first
/// (ties keep discovery order), so a token that is a prefix of a longer one
/// ("VL1" inside "VL12") can never clip it.
fn substitute(text: &str, map: &AssignmentMap) -> String {
    let mut order: Vec<&String> = scanner::find_tokens(text)
        .iter()
        .filter_map(|t| map.get_key_value(t).map(|(k, _)| k))
        .collect();
    order.sort_by_key(|t| Reverse(t.len()));

    let mut result = text.to_string();
    for token in order {
        result = result.replace(token.as_str(), &map[token]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RandomizerConfig, SymbolPools};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn tiny_config(upper_latin: &[&str]) -> RandomizerConfig {
        RandomizerConfig {
            pools: SymbolPools {
                upper_latin: upper_latin.iter().map(|s| s.to_string()).collect(),
                lower_latin: vec![],
                upper_greek: vec![],
                lower_greek: vec![],
                digit: vec![],
                any: vec![],
            },
            conflict_groups: RandomizerConfig::default().conflict_groups,
        }
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let engine = RandomizerEngine::new();
        assert_eq!(engine.randomize("", None, &mut rng(1)), "");
    }

    #[test]
    fn text_without_tokens_is_returned_unchanged() {
        let engine = RandomizerEngine::new();
        let text = "Just prose with x and \\alpha.";
        assert_eq!(engine.randomize(text, None, &mut rng(1)), text);
    }

    #[test]
    fn every_assigned_token_disappears_from_the_output() {
        let engine = RandomizerEngine::new();
        let text = "Let VL1 be a set of VN1 elements, with Vg1 and VV2 free.";
        let out = engine.randomize(text, None, &mut rng(7));
        for token in ["VL1", "VN1", "Vg1", "VV2"] {
            assert!(!out.contains(token), "{} survived in {:?}", token, out);
        }
    }

    #[test]
    fn no_two_tokens_share_a_symbol() {
        let engine = RandomizerEngine::new();
        let text = "VL1 VL2 VL3 Vl1 Vl2 Vg1 Vg2 VG1 VN1 VN2 VV1 VV2";
        let map = engine.plan(text, None, &mut rng(11));
        assert_eq!(map.len(), 12);
        let distinct: HashSet<&Symbol> = map.values().collect();
        assert_eq!(distinct.len(), map.len());
    }

    #[test]
    fn assigned_symbols_are_mutually_conflict_free() {
        let engine = RandomizerEngine::new();
        let text = "VL1 and Vl1 and Vg1 and VV1 and VV2";
        let map = engine.plan(text, None, &mut rng(13));
        let symbols: Vec<&Symbol> = map.values().collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert!(!engine.conflict_table().conflicts(a, b), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn assigned_symbols_avoid_static_symbols() {
        let engine = RandomizerEngine::new();
        let text = "Given u, v and \\theta, choose Vl1, Vl2 and Vg1.";
        let map = engine.plan(text, None, &mut rng(17));
        assert_eq!(map.len(), 3);
        for s in map.values() {
            for fixed in scanner::static_symbols(text) {
                assert!(
                    !engine.conflict_table().conflicts(s, &fixed),
                    "{} conflicts with static {}",
                    s,
                    fixed
                );
            }
        }
    }

    #[test]
    fn supplied_static_set_overrides_extraction() {
        // Force "A" off limits even though the text never mentions it.
        let engine = RandomizerEngine::with_config(tiny_config(&["A", "Z"]));
        let fixed = HashSet::from(["A".to_string()]);
        let map = engine.plan("VL1", Some(&fixed), &mut rng(19));
        assert_eq!(map["VL1"], "Z");
    }

    #[test]
    fn exhausted_pool_falls_back_to_a_conflicting_symbol() {
        // "I" conflicts with the literal "l" in "let"; the one-entry pool
        // must degrade to assigning it anyway.
        let engine = RandomizerEngine::with_config(tiny_config(&["I"]));
        let map = engine.plan("let VL1", None, &mut rng(23));
        assert_eq!(map["VL1"], "I");
        assert!(engine.conflict_table().conflicts("I", "l"));
    }

    #[test]
    fn empty_pool_leaves_the_token_alone() {
        let engine = RandomizerEngine::with_config(tiny_config(&[]));
        let text = "nothing fits VL1 here";
        assert!(engine.plan(text, None, &mut rng(29)).is_empty());
        assert_eq!(engine.randomize(text, None, &mut rng(29)), text);
    }

    #[test]
    fn unrecognized_code_is_left_as_literal_text() {
        let engine = RandomizerEngine::new();
        let out = engine.randomize("VX1 but VL1", None, &mut rng(31));
        assert!(out.contains("VX1"));
        assert!(!out.contains("VL1"));
    }

    #[test]
    fn fixed_seed_reproduces_the_output() {
        let engine = RandomizerEngine::new();
        let text = "VL1 Vl1 Vg1 VG1 VN1 VV1 and a literal k";
        let a = engine.randomize(text, None, &mut rng(99));
        let b = engine.randomize(text, None, &mut rng(99));
        assert_eq!(a, b);
    }

    #[test]
    fn prefix_token_cannot_clip_a_longer_one() {
        let engine = RandomizerEngine::with_config(tiny_config(&["A", "B", "C"]));
        let text = "VL1 differs from VL12";
        let out = engine.randomize(text, None, &mut rng(37));
        // Neither token may survive, wholly or as a leftover digit tail.
        assert!(!out.contains("VL1"));
        assert!(!out.contains("VL12"));
    }

    #[test]
    fn note_pair_shares_one_assignment() {
        let engine = RandomizerEngine::new();
        let (front, back) = engine.randomize_note("VL1", "VL1", &mut rng(41));
        assert_eq!(front, back);
        assert!(!front.contains("VL1"));
    }

    #[test]
    fn note_back_symbols_respect_front_statics() {
        // The literal "I" on the front must keep I and its confusables off
        // the back's token.
        let cfg = tiny_config(&["I", "l", "A"]);
        let engine = RandomizerEngine::with_config(cfg);
        let (_, back) = engine.randomize_note("I is taken", "choose VL1", &mut rng(43));
        assert_eq!(back, "choose A");
    }
}
