use std::fmt;
use std::process::ExitCode;

use mimalloc::MiMalloc;

use hashprobe::{reader, FixedProbingTable, InsertErrorKind, Keyed, ProbeCounter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CAPACITY: usize = 103;

#[derive(Debug)]
struct User {
    username: String,
}

impl User {
    fn new(username: String) -> Self {
        Self { username }
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user {}", self.username)
    }
}

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: hashprobe <key file>");
        return ExitCode::FAILURE;
    };
    let capacity = std::env::var("CAPACITY").map_or(DEFAULT_CAPACITY, |value| {
        value.parse().expect("unable to parse CAPACITY")
    });

    let keys = match reader::read_keys(&path) {
        Ok(keys) => keys,
        Err(error) => {
            eprintln!("unable to read {path}: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut table = FixedProbingTable::new(capacity).expect("unable to allocate table");
    let mut probes = ProbeCounter::new(capacity);

    for key in keys {
        match table.insert(User::new(key.clone())) {
            Ok(()) => {}
            Err(rejected) if rejected.kind() == InsertErrorKind::DuplicateKey => {
                println!("{} already exists, skipping", rejected.record());
            }
            Err(rejected) => {
                eprintln!("{rejected}");
                return ExitCode::FAILURE;
            }
        }
        // Duplicates still count: the tally measures the hash, not the table.
        probes.record(table.hash_index(&key));
    }

    match table.occupied() {
        Ok(entries) => {
            println!(
                "Table holds {} records across {} slots:",
                table.len(),
                table.capacity()
            );
            for (slot, user) in entries {
                println!("slot[{slot}] = {user}");
            }
        }
        Err(_) => println!("Table is empty."),
    }
    println!();
    print!("{}", probes.render_histogram());
    println!();
    print!("{}", probes.render_stats());

    ExitCode::SUCCESS
}
