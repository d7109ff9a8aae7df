// Minimal test harness for the span scanner
// Run with: cargo run --bin scanner_test
// src/bin/scanner_test.rs
use randomizer_core::core::scanner;

fn main() {
    let test_cases = [
        "Let VL1 be a set of VN1 elements.",
        "Suppose Vg1 > 0 and |Vl1 - Vl2| < Vg1.",
        "\\theta vs \\thetabar vs \\frac{a}{b}",
        "VVL1 overlaps, VL12 nests VL1",
        "no placeholders here",
    ];
    for text in test_cases.iter() {
        let mut statics: Vec<_> = scanner::static_symbols(text).into_iter().collect();
        statics.sort();
        println!("{}", text);
        println!("  tokens  => {:?}", scanner::find_tokens(text));
        println!("  statics => {:?}", statics);
    }
}
