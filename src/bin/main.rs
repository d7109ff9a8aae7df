use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randomizer_core::core::scanner;
use randomizer_core::RandomizerEngine;
use std::io::{stdin, stdout, Write};

fn main() {
    let engine = RandomizerEngine::new();
    let mut front = String::from("Let VL1 be a set of VN1 elements, and let Vg1 > 0.");
    let mut back = String::from("Then VL1 contains exactly VN1 elements for any Vg1.");
    let mut rng = StdRng::from_entropy();

    println!("{}", "Math Randomizer demo. Type 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");

    loop {
        print_card(&engine, &front, &back, &mut rng);

        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {} // Enter - reroll with the same sources
            s if s.starts_with("front ") => front = s["front ".len()..].to_string(),
            s if s.starts_with("back ") => back = s["back ".len()..].to_string(),
            s if s.starts_with("seed ") => {
                if let Ok(seed) = s["seed ".len()..].parse::<u64>() {
                    rng = StdRng::seed_from_u64(seed);
                    println!("rng reseeded with {}", seed);
                }
            }
            _ => println!("{}", "commands: front <text>, back <text>, seed <n>, exit".dim()),
        }
    }
}

fn print_card(engine: &RandomizerEngine, front: &str, back: &str, rng: &mut StdRng) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Math Randomizer demo".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Press [Enter] to reroll today's symbols for the same card.");
    println!("Edit with 'front <text>' / 'back <text>', reseed with 'seed <n>'.\n");

    println!("{} {}", "Source front:".bold(), front);
    println!("{} {}", "Source back: ".bold(), back);

    let combined = format!("{} {}", front, back);
    let mut statics: Vec<_> = scanner::static_symbols(&combined).into_iter().collect();
    statics.sort();
    println!("\nTokens found:   {:?}", scanner::find_tokens(&combined));
    println!("Static symbols: {:?}", statics);

    let (new_front, new_back) = engine.randomize_note(front, back, rng);
    println!("\n{} {}", "Front ->".green().bold(), new_front);
    println!("{} {}", "Back  ->".green().bold(), new_back);

    print!("\n> ");
    stdout().flush().unwrap();
}
