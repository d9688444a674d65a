use std::process::Command;

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Dev builds report "0.3.0@abc1234"; tagged clean builds just the version.
    let hash = git(&["rev-parse", "--short", "HEAD"]);
    let dirty = !git(&["status", "--porcelain"]).is_empty();
    let version = env!("CARGO_PKG_VERSION");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .lines()
        .any(|tag| tag == format!("v{}", version));

    let release = hash.is_empty() || (tagged && !dirty);
    println!("cargo:rustc-env=FANBRICK_GIT_HASH={}", hash);
    println!("cargo:rustc-env=FANBRICK_IS_RELEASE={}", release);
}
