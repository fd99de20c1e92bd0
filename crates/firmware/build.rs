fn main() {
    // Only pass linker scripts for hardware builds; host tests link normally.
    #[cfg(feature = "hardware")]
    {
        // memory.x comes from embassy-stm32's `memory-x` feature.
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
