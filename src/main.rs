//! # headerguard
//!
//! Checks that every source file under a folder starts with the expected
//! legal header.

mod cli;
mod error;
mod output;

use std::process;

fn main() {
  let status = cli::run(std::env::args_os());
  process::exit(status.code());
}
