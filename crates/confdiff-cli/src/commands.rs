use std::fs;

use anyhow::Context;
use colored::Colorize;

use confdiff_docs::{ConfigDocs, KeyDoc};
use confdiff_engine::{CompareSources, DiffEngine, DiffOptions};
use confdiff_export::export_documented_yaml;
use confdiff_loader::load_config;
use confdiff_normalize::{detect_base_path, normalize_config};
use confdiff_types::ConfigValue;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args),
        Command::Export(args) => cmd_export(args),
        Command::Docs(args) => cmd_docs(args),
    }
}

fn cmd_diff(args: DiffArgs) -> anyhow::Result<()> {
    let left = load_config(&args.left).with_context(|| format!("failed to load {}", args.left))?;
    let right =
        load_config(&args.right).with_context(|| format!("failed to load {}", args.right))?;

    let (left, right) = if args.normalize_paths {
        (
            normalized(left, args.base_path.as_deref()),
            normalized(right, args.base_path.as_deref()),
        )
    } else {
        (left, right)
    };

    let engine = DiffEngine::new(DiffOptions {
        include_unchanged: args.include_unchanged,
        max_depth: args.max_depth,
        ignore_keys: args.ignore_keys,
        ignore_paths: args.ignore_paths,
        path_separator: args.separator,
    });
    let result = engine.compare(
        &left,
        &right,
        Some(CompareSources::files(&args.left, &args.right)),
    );

    let rendered = match args.format {
        OutputFormat::Json => confdiff_format::format_json(&result)?,
        OutputFormat::Yaml => confdiff_format::format_yaml(&result)?,
        OutputFormat::Summary => confdiff_format::format_summary(&result),
        OutputFormat::Detailed => confdiff_format::format_detailed(&result, &ConfigDocs),
    };
    emit(&rendered, args.output.as_deref())
}

/// Rewrites path-like strings against the explicit base, or the tree's
/// own detected base. Trees with no detectable base pass through.
fn normalized(tree: ConfigValue, base_override: Option<&str>) -> ConfigValue {
    let base = base_override
        .map(str::to_string)
        .or_else(|| detect_base_path(&tree));
    match base {
        Some(base) => normalize_config(&tree, &base).normalized,
        None => tree,
    }
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let tree = load_config(&args.file).with_context(|| format!("failed to load {}", args.file))?;
    let yaml = export_documented_yaml(&tree, &ConfigDocs);
    emit(&yaml, args.output.as_deref())
}

fn cmd_docs(args: DocsArgs) -> anyhow::Result<()> {
    match args.key {
        Some(key) => match ConfigDocs::lookup(&key) {
            Some(doc) => {
                print_doc(doc);
                Ok(())
            }
            None => anyhow::bail!("no documentation for key '{key}'"),
        },
        None => {
            for doc in ConfigDocs::all() {
                // Pad before coloring; escape codes never count as width.
                println!("{} {}", format!("{:<26}", doc.key).bold(), doc.description);
            }
            Ok(())
        }
    }
}

fn print_doc(doc: &KeyDoc) {
    println!("{}", doc.key.bold());
    println!("  {}", doc.description);
    if let Some(affects) = doc.affects {
        println!("  affects: {}", affects.yellow());
    }
    if let Some(default) = doc.default_value {
        println!("  default: {}", default.cyan());
    }
    if let Some(url) = doc.documentation_url {
        println!("  docs: {}", url.blue());
    }
}

fn emit(text: &str, output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {path}"))?;
            println!("{} Wrote {}", "✓".green().bold(), path.bold());
        }
        None => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
