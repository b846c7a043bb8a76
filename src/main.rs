/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change runner functionality.
 */
use std::process::Command;

use aoc2023::{ANSI_BOLD, ANSI_RESET};
use prettytable::{row, Table};

/// Days with a solution binary under `src/bin/`.
const SOLVED_DAYS: &[u8] = &[1, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 18, 19];

fn run_day(day: u8) -> Option<f64> {
    let day_padded = format!("{day:02}");

    let mut args: Vec<&str> = vec!["run", "--bin", day_padded.as_str()];
    if cfg!(not(debug_assertions)) {
        args.push("--release");
    }

    let cmd = Command::new("cargo").args(&args).output().unwrap();

    println!("----------");
    println!("{ANSI_BOLD}| Day {day_padded} |{ANSI_RESET}");
    println!("----------");

    let output = String::from_utf8(cmd.stdout).unwrap();
    if output.is_empty() {
        println!("Not solved.");
        None
    } else {
        println!("{output}");
        Some(aoc2023::parse_exec_time(&output))
    }
}

fn main() {
    let mut args = pico_args::Arguments::from_env();
    let day: Option<u8> = args
        .opt_value_from_str("--day")
        .expect("--day expects a day number");

    let days: Vec<u8> = match day {
        Some(day) => vec![day],
        None => SOLVED_DAYS.to_vec(),
    };

    let mut table = Table::new();
    table.add_row(row!["Day", "Time (ms)"]);

    let mut total = 0_f64;
    for day in days {
        if let Some(elapsed) = run_day(day) {
            table.add_row(row![format!("{day:02}"), format!("{elapsed:.2}")]);
            total += elapsed;
        }
    }
    table.add_row(row![ANSI_BOLD.to_owned() + "Total" + ANSI_RESET, format!("{total:.2}")]);

    table.printstd();
}
