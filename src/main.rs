// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! node2json CLI entrypoint.
//!
//! Converts a JSON manifest of node interfaces into a Porcupine node dictionary, or a single
//! Python function file into one custom node document.

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use node2json::model::{Dictionary, NodeRequest};
use node2json::store::{self, WriteDurability};
use node2json::Config;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <manifest.json> [--dictionary <name>] [options]\n  {program} --function <file.py> [--module <name>] [--outputs <a,b,...>] [options]\n  {program} --schema [--output <file>]\n\nOptions:\n  --config <file>        JSON config (docs root, package, docker hints, importable modules)\n  --package-root <dir>   directory containing the library package, used to probe imports\n  --output <file>        write JSON to <file> instead of stdout\n  --durable-writes       fsync the output file and its directory\n  --verbose              debug logging on stderr (otherwise RUST_LOG, default warn)"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    manifest: Option<String>,
    function: Option<String>,
    schema: bool,
    config: Option<String>,
    output: Option<String>,
    dictionary: Option<String>,
    package_root: Option<String>,
    module: Option<String>,
    outputs: Option<Vec<String>>,
    durable_writes: bool,
    verbose: bool,
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => set_flag(&mut options.schema)?,
            "--durable-writes" => set_flag(&mut options.durable_writes)?,
            "--verbose" | "-v" => set_flag(&mut options.verbose)?,
            "--function" => set_once(&mut options.function, args.next().ok_or(())?)?,
            "--config" => set_once(&mut options.config, args.next().ok_or(())?)?,
            "--output" | "-o" => set_once(&mut options.output, args.next().ok_or(())?)?,
            "--dictionary" => set_once(&mut options.dictionary, args.next().ok_or(())?)?,
            "--package-root" => set_once(&mut options.package_root, args.next().ok_or(())?)?,
            "--module" => set_once(&mut options.module, args.next().ok_or(())?)?,
            "--outputs" => {
                let raw = args.next().ok_or(())?;
                let names = raw
                    .split(',')
                    .map(|name| name.trim().to_owned())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>();
                set_once(&mut options.outputs, names)?;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => set_once(&mut options.manifest, arg)?,
        }
    }

    let modes = [options.manifest.is_some(), options.function.is_some(), options.schema];
    if modes.iter().filter(|mode| **mode).count() != 1 {
        return Err(());
    }

    if options.function.is_none() && (options.module.is_some() || options.outputs.is_some()) {
        return Err(());
    }

    if options.manifest.is_none() && options.dictionary.is_some() {
        return Err(());
    }

    if options.schema
        && (options.config.is_some() || options.package_root.is_some() || options.durable_writes)
    {
        return Err(());
    }

    Ok(options)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_config(options: &CliOptions) -> Result<Config, Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(root) = &options.package_root {
        config.package_root = Some(PathBuf::from(root));
    }
    Ok(config)
}

fn emit(options: &CliOptions, value: &impl serde::Serialize) -> Result<(), Box<dyn Error>> {
    let durability = if options.durable_writes {
        WriteDurability::Durable
    } else {
        WriteDurability::BestEffort
    };
    match &options.output {
        Some(path) => store::write_json_atomic(Path::new(path), value, durability)?,
        None => {
            let text = store::to_pretty_json(Path::new("<stdout>"), value)?;
            std::io::stdout().lock().write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    if options.schema {
        let schema = schemars::schema_for!(Dictionary);
        return emit(&options, &schema);
    }

    let config = load_config(&options)?;
    let converter = config.converter();

    if let Some(function_path) = &options.function {
        let path = Path::new(function_path);
        let source = store::read_text(path)?;
        let module = match &options.module {
            Some(module) => module.clone(),
            None => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .ok_or_else(|| format!("cannot derive a module name from {path:?}"))?,
        };
        let request = NodeRequest::new().with_module(module).with_module_path(path);
        let outputs = options.outputs.clone().unwrap_or_default();
        let document = converter.function_to_document(&source, &outputs, &request)?;
        return emit(&options, &document);
    }

    let manifest_path = options.manifest.as_deref().ok_or("missing manifest path")?;
    let mut manifest = store::load_manifest(manifest_path)?;
    if let Some(name) = &options.dictionary {
        manifest.dictionary = Some(name.clone());
    }
    let dictionary = converter.manifest_to_dictionary(&manifest)?;
    tracing::info!(nodes = dictionary.nodes.len(), "converted manifest");
    emit(&options, &dictionary)
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "node2json".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing(options.verbose);

    if let Err(err) = run(options) {
        eprintln!("node2json: {err}");
        std::process::exit(1);
    }
}
