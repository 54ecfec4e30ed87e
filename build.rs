fn main() {
    // "Today" for open-ended positions and the footer year, fixed at build
    // time so server render and hydration agree.
    let build_date = chrono::Utc::now().date_naive();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date.format("%Y-%m-%d"));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
