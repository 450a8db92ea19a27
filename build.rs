use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=GYMFLOW_GIT_VERSION");

    println!("cargo:rustc-env=GYMFLOW_GIT_VERSION={}", git_version());
}

/// Release builds pass GYMFLOW_GIT_VERSION; local builds ask git.
fn git_version() -> String {
    std::env::var("GYMFLOW_GIT_VERSION")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| {
            let out = Command::new("git")
                .args(["describe", "--tags", "--always", "--dirty"])
                .output()
                .ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
