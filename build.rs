use std::env;
use std::path::PathBuf;
use std::process::Command;

const HASH_VAR: &str = "AIRTYPE_GIT_HASH";

fn main() {
    println!("cargo:rerun-if-env-changed={HASH_VAR}");

    // Packagers building from a tarball can pin the hash themselves
    let hash = env::var(HASH_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env={HASH_VAR}={hash}");

    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) {
        for watched in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(watched);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

/// Runs git and returns trimmed stdout, or `None` if git is missing or fails.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
