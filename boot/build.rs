//! Build script for the board firmware
//!
//! Puts `memory.x` where the cortex-m-rt linker script can find it.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let memory_x = PathBuf::from("memory.x");

    if let Err(e) = fs::copy(&memory_x, out_dir.join("memory.x")) {
        eprintln!("Error: cannot copy {:?}: {}", memory_x, e);
        std::process::exit(1);
    }

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}
