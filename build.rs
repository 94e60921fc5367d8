fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // PUBLIC_URL is read with option_env!, rebuild when it changes
    println!("cargo:rerun-if-env-changed=PUBLIC_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
