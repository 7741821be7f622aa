//! Verification harness for the Shioi128 generator
//!
//! Seeds with the fixed literal 401 and checks every state transition and
//! output value against known-good vectors, printing each value in
//! fixed-width lowercase hex (16 digits per word, no prefix). Exits with a
//! non-zero status on the first mismatch.

use std::process::ExitCode;

use shioi_rng_core_rs::Shioi128;

const SEED: u64 = 401;

const STATE_AFTER_SEED: (u64, u64) = (0x6C64F673ED93B6CC, 0x97C703D5F6C9D72B);
const EXPECTED_OUTPUTS: [u64; 4] = [
    0xF8D7B7BA91C4D17A,
    0xB053788D02AE0471,
    0xF6F7467B5C631C8A,
    0x8F109E92A5905420,
];
const STATE_AFTER_NEXTS: (u64, u64) = (0x1FE470A806C38EB1, 0xFAC7289977D6FD63);
const STATE_AFTER_JUMP32: (u64, u64) = (0x985B17ADA536684C, 0x2CECBEFC3FB03DF8);
const STATE_AFTER_JUMP64: (u64, u64) = (0xB4B7A9519A8655B4, 0x9E93ADBDF62C1596);
const STATE_AFTER_JUMP96: (u64, u64) = (0x67EA4FFD18216615, 0x696B13B974BFBFF7);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("verification failed: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut rng = Shioi128::new(SEED);

    print_state("init: ", &rng);
    expect_state(&rng, STATE_AFTER_SEED)?;

    print!("next: ");
    for expected in EXPECTED_OUTPUTS {
        let value = rng.next();
        print!("{:016x} ", value);
        if value != expected {
            println!();
            return Err(format!(
                "output {:016x}, expected {:016x}",
                value, expected
            ));
        }
    }
    println!();

    print_state("jp 0: ", &rng);
    expect_state(&rng, STATE_AFTER_NEXTS)?;

    rng.jump32();
    print_state("jp32: ", &rng);
    expect_state(&rng, STATE_AFTER_JUMP32)?;

    rng.jump64();
    print_state("jp64: ", &rng);
    expect_state(&rng, STATE_AFTER_JUMP64)?;

    rng.jump96();
    print_state("jp96: ", &rng);
    expect_state(&rng, STATE_AFTER_JUMP96)?;

    Ok(())
}

fn print_state(title: &str, rng: &Shioi128) {
    let (s0, s1) = rng.state();
    println!("{}{:016x} {:016x}", title, s0, s1);
}

fn expect_state(rng: &Shioi128, expected: (u64, u64)) -> Result<(), String> {
    let (s0, s1) = rng.state();
    if (s0, s1) == expected {
        Ok(())
    } else {
        Err(format!(
            "state ({:016x}, {:016x}), expected ({:016x}, {:016x})",
            s0, s1, expected.0, expected.1
        ))
    }
}
