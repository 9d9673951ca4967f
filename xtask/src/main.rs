use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for screen-emulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Run tests
    Test {
        #[arg(long)]
        doc: bool,
        /// Run only tests of the given library modules (display, input, engine, config)
        #[arg(long = "module", value_name = "MODULE")]
        modules: Vec<String>,
    },
    /// Run the present benchmarks
    Bench,
    /// Launch the front-end with the demo engine
    Run {
        /// Configuration file to load
        config: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Install a git pre-commit hook running fmt, clippy and tests
    InstallHooks,
}

/// Library modules that can be tested on their own
const MODULES: [&str; 4] = ["display", "input", "engine", "config"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Test { doc, modules } => run_test(doc, &modules),
        Commands::Bench => cargo(&["bench"]),
        Commands::Run { config, release } => run_screen(config.as_deref(), release),
        Commands::InstallHooks => install_hooks(),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== Running CI Pipeline ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;
    run_task("Build", || cargo(&["build", "--all-targets"]), verbose)?;
    run_task("Test", || run_test(false, &[]), verbose)?;

    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );

    Ok(())
}

fn run_fmt(check: bool) -> Result<()> {
    if check {
        cargo(&["fmt", "--all", "--", "--check"])
    } else {
        cargo(&["fmt", "--all"])
    }
}

fn run_clippy(fix: bool) -> Result<()> {
    if fix {
        cargo(&["clippy", "--all-targets", "--fix"])
    } else {
        cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
    }
}

fn run_test(doc: bool, modules: &[String]) -> Result<()> {
    if doc {
        return cargo(&["test", "--doc"]);
    }

    if modules.is_empty() {
        return cargo(&["test", "--workspace"]);
    }

    let mut failed = Vec::new();

    for module in modules {
        if !MODULES.contains(&module.as_str()) {
            anyhow::bail!(
                "Unknown module '{}', expected one of: {}",
                module,
                MODULES.join(", ")
            );
        }

        println!("{} Running {} tests...", "→".blue(), module.bold());

        match cargo(&["test", "--lib", &format!("{}::", module)]) {
            Ok(()) => println!("{} {} tests passed\n", "✓".green(), module),
            Err(_) => {
                println!("{} {} tests failed\n", "✗".red(), module);
                failed.push(module.as_str());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Tests failed in: {}", failed.join(", "))
    }
}

fn run_screen(config: Option<&str>, release: bool) -> Result<()> {
    let mut args = vec!["run"];
    if release {
        args.push("--release");
    }
    if let Some(config) = config {
        if !std::path::Path::new(config).exists() {
            println!(
                "{} {} does not exist, defaults will be written there",
                "⚠".yellow().bold(),
                config.yellow()
            );
        }
        args.extend(["--", config]);
    }
    cargo(&args)
}

fn install_hooks() -> Result<()> {
    use std::fs;

    let hook_content = r#"#!/bin/sh
# Auto-generated by cargo x install-hooks
set -e

cargo x fmt --check
cargo x clippy
cargo x test
"#;

    let hook_path = ".git/hooks/pre-commit";
    fs::write(hook_path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)?;
    }

    println!("{}", "✓ Git pre-commit hook installed".green());

    Ok(())
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    println!("{} {}", "→".blue(), name);

    let start = Instant::now();
    let result = task();

    match &result {
        Ok(()) if verbose => println!(
            "{} {} ({:.2}s)",
            "✓".green().bold(),
            name,
            start.elapsed().as_secs_f64()
        ),
        Ok(()) => println!("{} {}", "✓".green().bold(), name),
        Err(_) => println!("{} {}", "✗".red().bold(), name),
    }

    result
}

fn cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("cargo {} failed with exit code: {}", args.join(" "), status);
    }

    Ok(())
}
