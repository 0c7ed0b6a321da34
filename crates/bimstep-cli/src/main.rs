//! bimstep CLI - export building models to IFC STEP files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bimstep_model::{Document, SchemaRegistry};
use bimstep_step::{write_to_file, Header, Serializer};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bimstep")]
#[command(about = "Export JSON building models to IFC STEP files", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a JSON model document to a STEP file
    Export {
        /// Input JSON document
        input: PathBuf,
        /// Output file (stdout when omitted)
        output: Option<PathBuf>,
        /// TOML file with header fields
        #[arg(long)]
        header: Option<PathBuf>,
        /// FILE_NAME name (default: output file name)
        #[arg(short, long)]
        name: Option<String>,
        /// FILE_NAME author, repeatable
        #[arg(short, long)]
        author: Vec<String>,
        /// Write only the DATA section records
        #[arg(long)]
        data_only: bool,
    },
    /// List schema types, or show the attribute layout of one type
    Schema {
        /// Entity type name (case-insensitive)
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export {
            input,
            output,
            header,
            name,
            author,
            data_only,
        } => {
            let header = load_header(header.as_deref(), name, author, output.as_deref())?;
            let text = export_document(&input, header, data_only)?;
            match output {
                Some(path) => {
                    write_to_file(&text, &path)?;
                    info!(path = %path.display(), "exported");
                    eprintln!("Exported STEP to {}", path.display());
                }
                None => print!("{text}"),
            }
        }
        Commands::Schema { name } => {
            print!("{}", describe_schema(SchemaRegistry::ifc2x3(), name.as_deref())?);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Header from an optional TOML file, with command-line overrides and a
/// current time stamp when none is configured.
fn load_header(
    path: Option<&Path>,
    name: Option<String>,
    author: Vec<String>,
    output: Option<&Path>,
) -> Result<Header> {
    let mut header = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading header {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing header {}", path.display()))?
        }
        None => Header::default(),
    };

    if let Some(name) = name {
        header.name = name;
    } else if header.name.is_empty() {
        if let Some(file_name) = output.and_then(Path::file_name) {
            header.name = file_name.to_string_lossy().into_owned();
        }
    }
    if !author.is_empty() {
        header.author = author;
    }
    if header.time_stamp.is_empty() {
        header.time_stamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    }
    Ok(header)
}

fn export_document(input: &Path, header: Header, data_only: bool) -> Result<String> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let doc = Document::from_json(&json).with_context(|| format!("parsing {}", input.display()))?;
    let loaded = doc
        .load(SchemaRegistry::ifc2x3())
        .with_context(|| format!("loading {}", input.display()))?;

    let serializer = Serializer::new(header);
    let text = if data_only {
        serializer.serialize_data(&loaded.model, loaded.root)?
    } else {
        serializer.serialize(&loaded.model, loaded.root)?
    };
    Ok(text)
}

fn describe_schema(schema: &SchemaRegistry, name: Option<&str>) -> Result<String> {
    let mut out = String::new();
    let Some(name) = name else {
        out.push_str(&format!("{} ({} types)\n", schema.name(), schema.len()));
        for ty in schema.types() {
            let marker = if ty.is_abstract() { " (abstract)" } else { "" };
            out.push_str(&format!("  {}{}\n", ty.name(), marker));
        }
        return Ok(out);
    };

    let ty = schema
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown entity type: {}", name))?;
    out.push_str(&format!("{}\n", ty.lineage().join(" > ")));
    out.push_str("Attributes:\n");
    for slot in ty.attributes() {
        let mut flags = Vec::new();
        if slot.derived {
            flags.push("derived");
        } else if slot.optional {
            flags.push("optional");
        }
        if slot.aggregate {
            flags.push("aggregate");
        }
        out.push_str(&format!(
            "  {:>2} {} [{}]{}\n",
            slot.rank + 1,
            slot.name,
            slot.declared_in,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            }
        ));
    }
    if !ty.inverses().is_empty() {
        out.push_str("Inverses:\n");
        for slot in ty.inverses() {
            out.push_str(&format!(
                "  {} [{}] <- {}.{}\n",
                slot.name, slot.declared_in, slot.source, slot.attribute
            ));
        }
    }
    Ok(out)
}
