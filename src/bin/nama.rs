//! Command-line interface for nama
//!
//! This binary is thin glue around the library: it reads source files,
//! calls the parser and renderer, and writes the results. All document
//! logic lives in the library.
//!
//! Usage:
//!   nama file.nama [file2.nama ...]        - Compile to sibling .html files
//!   nama --stdout file.nama                - Print the HTML instead
//!   nama --ast [--format yaml] file.nama   - Dump the syntax tree
//!   nama --webography sources.txt          - Parse a webography file

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(
    name = "nama",
    version,
    about = "Compiles .nama markup files to HTML and parses webography records."
)]
struct Args {
    /// The .nama files to compile
    #[arg(required_unless_present = "webography")]
    files: Vec<PathBuf>,

    /// Dump the parsed syntax tree instead of rendering HTML
    #[arg(long)]
    ast: bool,

    /// Serialization format for tree dumps: 'json' or 'yaml'
    #[arg(long, default_value = "json")]
    format: String,

    /// Parse a webography file and dump its tree
    #[arg(long, value_name = "FILE")]
    webography: Option<PathBuf>,

    /// Print rendered HTML to stdout instead of writing .html files
    #[arg(long)]
    stdout: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.webography {
        let source = read_source(path);
        let web = nama::parse_webography(&source).unwrap_or_else(|e| {
            eprintln!("{}: {}", path.display(), e);
            exit(1);
        });
        println!("{}", serialize(&web, &args.format));
        return;
    }

    for path in &args.files {
        let source = read_source(path);
        let doc = nama::parse_document(&source).unwrap_or_else(|e| {
            eprintln!("{}: {}", path.display(), e);
            exit(1);
        });

        if args.ast {
            println!("{}", serialize(&doc, &args.format));
            continue;
        }

        let html = nama::render(&doc).unwrap_or_else(|e| {
            eprintln!("{}: render error: {}", path.display(), e);
            exit(1);
        });

        if args.stdout {
            print!("{}", html);
        } else {
            let output = path.with_extension("html");
            std::fs::write(&output, html).unwrap_or_else(|e| {
                eprintln!("{}: write error: {}", output.display(), e);
                exit(1);
            });
        }
    }
}

fn read_source(path: &PathBuf) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}: read error: {}", path.display(), e);
        exit(1);
    })
}

fn serialize<T: Serialize>(value: &T, format: &str) -> String {
    let result = match format {
        "json" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        other => {
            eprintln!("unknown format '{}', expected 'json' or 'yaml'", other);
            exit(1);
        }
    };
    result.unwrap_or_else(|e| {
        eprintln!("serialization error: {}", e);
        exit(1);
    })
}
