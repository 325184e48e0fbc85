use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

const DOMAIN_CRATE: &str = "tomeforge-domain";
/// Runtime concerns that belong in the engine, never in the domain
const FORBIDDEN_IN_DOMAIN: &[&str] = &["tokio", "rand", "tracing", "tracing-subscriber", "async-trait"];

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
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` or `"build"` otherwise
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
    let domain = metadata
        .packages
        .iter()
        .find(|package| package.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    let mut violations = forbidden_dependencies(domain);
    let src = domain
        .manifest_path
        .parent()
        .context("manifest has no parent directory")?
        .join("src");
    violations.extend(forbidden_paths_in(&src)?);

    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} must stay free of runtime dependencies:\n  {}",
            violations.join("\n  ")
        );
    }

    println!("arch-check: {DOMAIN_CRATE} OK");
    Ok(())
}

fn forbidden_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| dep.kind.is_none() && FORBIDDEN_IN_DOMAIN.contains(&dep.name.as_str()))
        .map(|dep| format!("Cargo.toml depends on `{}`", dep.name))
        .collect()
}

fn forbidden_paths_in(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = Regex::new(r"\b(tokio|rand|tracing)::").context("compiling path pattern")?;
    let mut violations = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                violations.extend(scan_source(&pattern, &path, &source));
            }
        }
    }
    violations.sort();
    Ok(violations)
}

fn scan_source(pattern: &Regex, path: &Path, source: &str) -> Vec<String> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter_map(|(number, line)| {
            pattern
                .find(line)
                .map(|found| format!("{}:{} uses `{}`", path.display(), number + 1, found.as_str()))
        })
        .collect()
}
