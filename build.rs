use chrono::Datelike;

fn main() {
    // Footer copyright year, read with env! at compile time
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
