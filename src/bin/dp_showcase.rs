//! Console showcase for the memoized problem set.
//!
//! Runs each problem on its classic example inputs and prints the results
//! with wall-clock timings. Several of these inputs (fib(50), the 18x18
//! grid, the 53-character construct targets) are hopeless for the naive
//! recursions; finishing instantly is the point.
//!
//! Run with: `cargo run --bin dp_showcase`

use std::time::Instant;

use memo_dp::problems::{
    best_sum::best_sum, can_construct::can_construct, can_sum::can_sum,
    count_construct::count_construct, fib::fib, grid_traveler::grid_traveler, how_sum::how_sum,
};

fn main() {
    println!("{}", "=".repeat(72));
    println!("memo-dp showcase: classic exercises, memoized");
    println!("{}", "=".repeat(72));

    let clock = Instant::now();

    println!("\n[1/7] Fibonacci");
    for n in [6, 7, 8, 50] {
        println!("  fib({n}) = {}", fib(n));
    }

    println!("\n[2/7] Grid traveler");
    for (m, n) in [(0, 0), (1, 1), (2, 2), (3, 2), (3, 3), (18, 18)] {
        println!("  grid_traveler({m}, {n}) = {}", grid_traveler(m, n));
    }

    println!("\n[3/7] canSum");
    for (target, nums) in [
        (7u64, &[5, 3, 4, 7][..]),
        (7, &[2, 4][..]),
        (8, &[2, 3, 5][..]),
        (300, &[7, 14][..]),
        (1400, &[7, 14][..]),
    ] {
        println!("  can_sum({target}, {nums:?}) = {}", can_sum(target, nums));
    }

    println!("\n[4/7] howSum");
    for (target, nums) in [
        (7u64, &[2, 3][..]),
        (7, &[5, 3, 4, 7][..]),
        (7, &[2, 4][..]),
        (8, &[2, 3, 5][..]),
        (1400, &[7, 14][..]),
    ] {
        println!(
            "  how_sum({target}, {nums:?}) = {}",
            describe(how_sum(target, nums))
        );
    }

    println!("\n[5/7] bestSum");
    for (target, nums) in [
        (7u64, &[5, 3, 4, 7][..]),
        (8, &[2, 3, 5][..]),
        (8, &[1, 4, 5][..]),
        (100, &[1, 2, 5, 25][..]),
    ] {
        println!(
            "  best_sum({target}, {nums:?}) = {}",
            describe(best_sum(target, nums))
        );
    }

    let bank = ["ab", "abc", "cd", "def", "abcd"];
    let board_bank = ["bo", "rd", "ate", "t", "ska", "sk", "boar"];
    let potent_bank = ["a", "p", "ent", "enter", "ot", "o", "t"];
    let e_target = "e".repeat(52) + "f";
    let e_bank = ["e", "ee", "eee", "eeee", "eeeee"];

    println!("\n[6/7] canConstruct");
    println!("  abcdef / {bank:?} = {}", can_construct("abcdef", &bank));
    println!(
        "  skateboard / {board_bank:?} = {}",
        can_construct("skateboard", &board_bank)
    );
    println!(
        "  enterapotentpot / {potent_bank:?} = {}",
        can_construct("enterapotentpot", &potent_bank)
    );
    println!(
        "  e*52+f / {e_bank:?} = {}",
        can_construct(&e_target, &e_bank)
    );

    println!("\n[7/7] countConstruct");
    println!(
        "  abcdef / {bank:?} = {}",
        count_construct("abcdef", &bank)
    );
    println!(
        "  skateboard / {board_bank:?} = {}",
        count_construct("skateboard", &board_bank)
    );
    println!(
        "  enterapotentpot / {potent_bank:?} = {}",
        count_construct("enterapotentpot", &potent_bank)
    );
    println!(
        "  e*52+f / {e_bank:?} = {}",
        count_construct(&e_target, &e_bank)
    );

    println!("\nTotal wall time: {:.3?}", clock.elapsed());
}

fn describe(combo: Option<Vec<u64>>) -> String {
    match combo {
        Some(terms) => format!("{terms:?}"),
        None => "no combination".to_string(),
    }
}
