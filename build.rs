use std::env;

fn main() {
    let api_base_url = env::var("API_BASE_URL").unwrap_or_default();

    println!("cargo:rerun-if-env-changed=API_BASE_URL");
    println!("cargo:rustc-env=API_BASE_URL={}", api_base_url);
}
