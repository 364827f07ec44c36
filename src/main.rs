//! doxyfile-gen CLI
//!
//! Usage:
//!   doxyfile-gen [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -c, --config <FILE>    Field values (TOML format)
//!   -o, --output <FILE>    Write the Doxyfile here instead of stdout
//!   --check                Validate the template without rendering
//!   --print-template       Print the built-in Doxyfile template
//!   --fields               List the fields a template can reference
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use doxyfile_gen::{DoxyfileConfig, RenderContext, DEFAULT_TEMPLATE, FIELD_NAMES};

#[derive(Parser)]
#[command(name = "doxyfile-gen")]
#[command(about = "Render a Doxygen configuration file from a template")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    template: Option<PathBuf>,

    /// Field values (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Commit number, overrides the config file
    #[arg(long)]
    commit_number: Option<String>,

    /// Project version, overrides the config file
    #[arg(long)]
    project_version: Option<String>,

    /// Set use_mdfile_as_mainpage (true or false), overrides the config file
    #[arg(long, value_name = "BOOL")]
    mainpage: Option<bool>,

    /// Input path (repeatable, replaces the configured list)
    #[arg(long = "input", value_name = "PATH")]
    input: Vec<String>,

    /// Example path (repeatable, replaces the configured list)
    #[arg(long = "example-path", value_name = "PATH")]
    example_path: Vec<String>,

    /// Path prefix to strip (repeatable, replaces the configured list)
    #[arg(long = "strip-from-path", value_name = "PATH")]
    strip_from_path: Vec<String>,

    /// Validate the template and list its field references
    #[arg(long)]
    check: bool,

    /// Print the built-in Doxyfile template
    #[arg(long)]
    print_template: bool,

    /// List the fields a template can reference
    #[arg(long)]
    fields: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Configuration built from command line overrides
    fn overrides(&self) -> DoxyfileConfig {
        let mut config = DoxyfileConfig::default();
        if let Some(commit_number) = &self.commit_number {
            config = config.with_commit_number(commit_number.clone());
        }
        if let Some(version) = &self.project_version {
            config = config.with_version(version.clone());
        }
        if let Some(flag) = self.mainpage {
            config = config.with_use_mdfile_as_mainpage(flag);
        }
        if !self.input.is_empty() {
            config = config.with_input(self.input.clone());
        }
        if !self.example_path.is_empty() {
            config = config.with_example_path(self.example_path.clone());
        }
        if !self.strip_from_path.is_empty() {
            config = config.with_strip_from_path(self.strip_from_path.clone());
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.print_template {
        print!("{}", DEFAULT_TEMPLATE);
        return;
    }

    if cli.fields {
        for name in FIELD_NAMES {
            println!("{}", name);
        }
        return;
    }

    // Load configuration, then layer command line overrides on top
    let config = match &cli.config {
        Some(path) => match DoxyfileConfig::from_file(path) {
            Ok(c) => {
                debug!(path = %path.display(), "loaded config");
                c
            }
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DoxyfileConfig::default(),
    };
    let config = config.merge(cli.overrides());

    // Read template
    let (source, filename) = match &cli.template {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let ctx = RenderContext::from_config(source, config);

    if cli.check {
        match ctx.check() {
            Ok(names) => {
                for name in names {
                    println!("{}", name);
                }
            }
            Err(e) => {
                eprint!("{}", e.format(ctx.template(), &filename));
                std::process::exit(1);
            }
        }
        return;
    }

    let rendered = match ctx.render() {
        Ok(text) => text,
        Err(e) => {
            eprint!("{}", e.format(ctx.template(), &filename));
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = write_output(path, &rendered) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!(path = %path.display(), "wrote Doxyfile");
        }
        None => print!("{}", rendered),
    }
}

fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
