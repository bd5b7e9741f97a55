use assembly_payload::AssemblyBuilder;
use assembly_payload::config::{BuilderConfig, DEFAULT_EXPIRATION_MINUTES};
use assembly_payload::domain::step::Steps;
use assembly_payload::interfaces::csv::field_reader::FieldReader;
use chrono::{DateTime, FixedOffset};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Builds an assembly request payload and prints it as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Credential key placed in the auth block
    #[arg(long)]
    auth_key: Option<String>,

    /// Maximum upload size in bytes
    #[arg(long)]
    max_size: Option<u64>,

    /// Minutes from now until the request expires
    #[arg(long, default_value_t = DEFAULT_EXPIRATION_MINUTES)]
    expires_in: u32,

    /// Absolute expiry as RFC 3339, e.g. 2024-01-15T10:30:00Z. Overrides --expires-in.
    #[arg(long)]
    expires_at: Option<DateTime<FixedOffset>>,

    /// URL notified when the assembly completes
    #[arg(long)]
    notify_url: Option<String>,

    /// Id of a server-side template
    #[arg(long)]
    template_id: Option<String>,

    /// Plain field, repeatable
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    fields: Vec<(String, String)>,

    /// CSV file with a key,value header, applied before --field
    #[arg(long = "fields", value_name = "CSV")]
    fields_csv: Option<PathBuf>,

    /// File attached under an autogenerated key, repeatable
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// File attached under an explicit key, repeatable
    #[arg(long = "file-as", value_name = "KEY=PATH", value_parser = parse_key_value)]
    keyed_files: Vec<(String, String)>,

    /// JSON object mapping step names to their options, added in file order
    #[arg(long)]
    steps: Option<PathBuf>,

    /// Pretty-print the payload
    #[arg(long)]
    pretty: bool,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assembly_payload=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut builder = AssemblyBuilder::with_config(BuilderConfig::with_expiration_minutes(
        cli.expires_in,
    ));

    // Auth
    if let Some(at) = cli.expires_at {
        builder.set_auth_expires(at);
    }
    if let Some(key) = cli.auth_key {
        builder.set_auth_key(key);
    }
    if let Some(max_size) = cli.max_size {
        builder.set_auth_max_size(max_size);
    }

    // Top-level params
    builder.set_notify_url(cli.notify_url.as_deref());
    builder.set_template_id(cli.template_id.as_deref());

    // Fields
    if let Some(path) = cli.fields_csv {
        FieldReader::from_path(path)
            .and_then(|reader| reader.apply(&mut builder))
            .into_diagnostic()?;
    }
    for (key, value) in cli.fields {
        builder.set_field(key, value).into_diagnostic()?;
    }

    // Files
    for path in cli.files {
        builder.add_file(path).into_diagnostic()?;
    }
    for (key, path) in cli.keyed_files {
        builder.add_file_with_key(key, path).into_diagnostic()?;
    }

    // Steps
    if let Some(path) = cli.steps {
        let file = File::open(path).into_diagnostic()?;
        let steps: Steps = serde_json::from_reader(BufReader::new(file)).into_diagnostic()?;
        for (name, options) in &steps {
            builder.add_step(name.as_str(), options);
        }
    }

    let payload = builder.build();
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    }
    .into_diagnostic()?;
    println!("{rendered}");

    Ok(())
}
