// File: src/config.rs
use crate::core::types::{Symbol, TokenType};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// One ordered candidate list per token type. A struct rather than a map so
/// that a pool can never be missing after a successful load; an empty pool
/// is allowed and simply leaves its tokens unsubstituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolPools {
    pub upper_latin: Vec<Symbol>,
    pub lower_latin: Vec<Symbol>,
    pub upper_greek: Vec<Symbol>,
    pub lower_greek: Vec<Symbol>,
    pub digit: Vec<Symbol>,
    /// Union of the four letter pools, taken when the config is built.
    /// Depleted independently of the pools it was unioned from.
    pub any: Vec<Symbol>,
}

impl SymbolPools {
    pub fn pool(&self, token_type: TokenType) -> &[Symbol] {
        match token_type {
            TokenType::UpperLatin => &self.upper_latin,
            TokenType::LowerLatin => &self.lower_latin,
            TokenType::UpperGreek => &self.upper_greek,
            TokenType::LowerGreek => &self.lower_greek,
            TokenType::Digit => &self.digit,
            TokenType::Any => &self.any,
        }
    }
}

/// The full, immutable randomizer configuration: symbol catalogues plus the
/// confusability groups. Built once (defaults or a JSON file) and passed
/// into the engine; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomizerConfig {
    pub pools: SymbolPools,
    pub conflict_groups: Vec<Vec<Symbol>>,
}

fn char_range(start: char, end: char) -> Vec<Symbol> {
    (start..=end).map(|c| c.to_string()).collect()
}

fn commands(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|n| format!("\\{}", n)).collect()
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        let upper_latin = char_range('A', 'Z');
        let lower_latin = char_range('a', 'z');
        let upper_greek = commands(&[
            "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi",
            "Omega",
        ]);
        let lower_greek = commands(&[
            "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "kappa",
            "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "phi", "chi", "psi", "omega",
        ]);
        // Digits 0 and 1 are excluded: both sit in confusion groups with
        // letters and make poor standalone symbols.
        let digit = ('2'..='9').map(|c| c.to_string()).collect();

        let any: Vec<Symbol> = upper_latin
            .iter()
            .chain(&lower_latin)
            .chain(&upper_greek)
            .chain(&lower_greek)
            .cloned()
            .collect();

        Self {
            pools: SymbolPools {
                upper_latin,
                lower_latin,
                upper_greek,
                lower_greek,
                digit,
                any,
            },
            conflict_groups: vec![
                vec!["I".into(), "l".into(), "1".into(), "|".into()],
                vec![
                    "O".into(),
                    "o".into(),
                    "0".into(),
                    "Q".into(),
                    "\\Theta".into(),
                    "\\theta".into(),
                ],
                vec!["v".into(), "\\nu".into(), "\\upsilon".into()],
                vec!["u".into(), "\\mu".into()],
                vec!["w".into(), "\\omega".into()],
                vec!["x".into(), "\\chi".into(), "\\times".into()],
                vec!["p".into(), "\\rho".into()],
                vec!["B".into(), "\\beta".into()],
            ],
        }
    }
}

impl RandomizerConfig {
    /// Loads a substitute configuration. A malformed file is a load-time
    /// fault for the caller to handle; the engine itself never revalidates.
    pub fn load_json(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Writes the configuration atomically, same temp-file-then-persist
    /// scheme as the deck-store persistence.
    pub fn save_json(&self, path: &Path) -> Result<(), Error> {
        let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;
        writer.flush()?;
        drop(writer);

        temp_file.persist(path)?;
        Ok(())
    }
}
