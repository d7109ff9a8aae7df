// Batch simulator: plays the role of the hosting card manager entering the
// review screen once per day. Run repeatedly (optionally with a date
// argument, YYYY-MM-DD) to watch the daily gate in action:
//   cargo run --bin deck_simulator -- 2026-03-01
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use randomizer_core::host::{randomize_due_notes, CardStore, MemoryStore};
use randomizer_core::persistence::{load_from_disk, save_to_disk};
use randomizer_core::RandomizerEngine;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const DECK: &str = "Math";

fn store_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("simulated_deck.bin");
    path
}

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("math_randomizer.log");
    path
}

fn log(message: &str) {
    if let Ok(mut file) = File::options().create(true).append(true).open(get_log_path()) {
        let _ = writeln!(file, "{}", message);
    }
}

fn seed_deck(store: &mut MemoryStore) {
    store.add_note(
        DECK,
        "Let VL1 be a set with VN1 elements.",
        "Any subset of VL1 has at most VN1 elements.",
    );
    store.add_note(
        "Math::Calc",
        "Suppose Vg1 > 0. Find Vl1 with |Vl1 - Vl2| < Vg1.",
        "Such a Vl1 exists whenever Vl2 is a limit point.",
    );
    store.add_note(
        DECK,
        "Let \\theta be fixed and VG1 a rotation by Vg1.",
        "VG1 composed with itself rotates by 2 Vg1, independent of \\theta.",
    );
}

fn main() {
    let today = std::env::args()
        .nth(1)
        .and_then(|arg| NaiveDate::parse_from_str(&arg, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive());

    log(&format!("--- simulator pass for {} ---", today));

    let path = store_path();
    let mut store = load_from_disk(&path).unwrap_or_else(|_| {
        log("no saved deck, seeding a fresh one");
        let mut fresh = MemoryStore::new();
        seed_deck(&mut fresh);
        fresh
    });

    let engine = RandomizerEngine::new();
    let mut rng = StdRng::from_entropy();
    let updated = randomize_due_notes(&mut store, DECK, &engine, today, &mut rng);

    println!("Math Randomizer: randomized {} cards in '{}'", updated, DECK);
    for id in store.due_note_ids(DECK) {
        if let Some(note) = store.note(id) {
            println!("  [{}] {}", id, note.front);
            log(&format!("note {} front: {}", id, note.front));
        }
    }

    if let Err(e) = save_to_disk(&store, &path) {
        eprintln!("[ERROR] Could not save deck: {}", e);
    } else {
        println!("Deck saved to '{}'", path.display());
    }
}
