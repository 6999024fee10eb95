// File: crates/chart-core/build.rs
// Summary: Link Windows system libraries that Skia's font manager needs when targeting Windows.

fn main() {
    // Build scripts run on the host; ask Cargo for the target instead of using cfg!.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        // RegOpenKeyExW / RegQueryInfoKeyW used by the DirectWrite font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
