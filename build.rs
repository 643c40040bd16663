fn main() {
    // Stamp the build time for the footer
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=posts");
}
