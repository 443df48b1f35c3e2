use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Dev marker so we can see whether the running server is actually the
    // newest binary.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITY_DIRECTORY_BUILD_ID={}", build_id);
}
