// File: crates/chart-core/build.rs
// Summary: Links the Windows registry API that Skia's font manager calls into.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
