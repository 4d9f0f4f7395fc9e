use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates each layer must never depend on, directly.
const FORBIDDEN_DEPS: &[(&str, &[&str])] = &[
    (
        "chatform-domain",
        &["chatform-shared", "chatform-player", "dioxus", "reqwest", "tokio", "serde_json"],
    ),
    ("chatform-shared", &["chatform-player", "dioxus", "reqwest", "tokio"]),
];

/// Source-level imports each crate must not contain, by crate directory.
const FORBIDDEN_IMPORTS: &[(&str, &str)] = &[
    ("crates/domain/src", r"\b(chatform_shared|chatform_player|dioxus|reqwest|tokio)::"),
    ("crates/shared/src", r"\b(chatform_player|dioxus|reqwest|tokio)::"),
    // The application layer talks to ports, never to adapters or the UI.
    ("crates/player/src/application", r"\bcrate::(ui|presentation)::|\breqwest::|\bdioxus::"),
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = check_dependencies(&metadata.packages);
    violations.extend(check_imports(&metadata.workspace_root)?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn check_dependencies(packages: &[Package]) -> Vec<String> {
    let by_name: BTreeMap<&str, &Package> =
        packages.iter().map(|p| (p.name.as_str(), p)).collect();

    let mut violations = Vec::new();
    for (crate_name, forbidden) in FORBIDDEN_DEPS {
        let Some(package) = by_name.get(crate_name) else {
            violations.push(format!("{crate_name} is missing from the workspace"));
            continue;
        };
        for dep in &package.dependencies {
            // dev-dependencies may pull in test helpers
            if dep.kind.as_deref() == Some("dev") {
                continue;
            }
            if forbidden.contains(&dep.name.as_str()) {
                violations.push(format!("{crate_name} must not depend on {}", dep.name));
            }
        }
    }
    violations
}

fn check_imports(root: &Path) -> anyhow::Result<Vec<String>> {
    let mut violations = Vec::new();
    for (dir, pattern) in FORBIDDEN_IMPORTS {
        let re = regex_lite::Regex::new(pattern).context("compiling import pattern")?;
        for file in rust_files(&root.join(dir))? {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            for (line_no, line) in source.lines().enumerate() {
                if line.trim_start().starts_with("//") {
                    continue;
                }
                if re.is_match(line) {
                    violations.push(format!(
                        "{}:{}: forbidden import `{}`",
                        file.display(),
                        line_no + 1,
                        line.trim()
                    ));
                }
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}
