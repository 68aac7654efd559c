// This file (build.rs) needs to be in the package root.
// It arranges for the linker to find the proper memory.x file when a demo is built for
// hardware. The memory.x files are assumed to be in directories memoryMaps/xxx/ in the
// package root, where xxx is one of the chip names below (for example memoryMaps/STM32F411/memory.x).
//
// The directory is taken from the first of
//
//        - environment variable $MEMMAP (converted to upper case),
//
//        - the first chip in `mcus` with a matching CARGO_FEATURE_* env variable,
//
//        - otherwise no search path is added and memory.x will be found as usual in the root directory.
//
// Host builds (cargo test) set neither, so nothing is printed and nothing is linked differently.
//
//    MEMMAP=stm32f411  cargo build --target thumbv7em-none-eabihf --features stm32f4xx,semihosting --example aht20-interface-semi

use std::env;

fn main() {

    let mcus = [
        "STM32F103",
        "STM32F401",
        "STM32F411",
        "STM32F722",
        "STM32H742",
        "STM32H743",
        "STM32L422",
    ];

    let pre = "CARGO_FEATURE_";

    let mut mem_map = env::var("MEMMAP").map(|v| v.to_uppercase()).unwrap_or_default();

    if mem_map.is_empty() {
        if let Some(m) = mcus.iter().find(|m| env::var_os(format!("{}{}", pre, m)).is_some()) {
            mem_map = m.to_string();
        }
    };

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MEMMAP");

    // Adding an empty search path causes problems compiling the crate, so skip if no map is named.
    if !mem_map.is_empty() {
        let indir = format!("memoryMaps/{}", mem_map);
        println!("cargo:rustc-link-search={}", indir);
        println!("cargo:rerun-if-changed={}/memory.x", indir);
    }
}
