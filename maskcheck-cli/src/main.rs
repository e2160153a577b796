//! maskcheck CLI
//!
//! Pick an element file and its certificate, preview them, pin both to IPFS
//! and have the backend validate the resulting links.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use maskcheck_core::constants::{ENV_PIPELINE_MODE, ENV_VALIDATION_BASE_URL};
use maskcheck_core::types::{Role, RoleStatus, SelectedFile, Toast, ToastLevel, TypeFilter};
use maskcheck_form::messages::{preview_heading, FORM_TITLE};
use maskcheck_form::{FormConfig, PipelineMode, SubmitOutcome, ToastLog, ValidationForm};
use maskcheck_ipfs::PinataClient;
use maskcheck_preview::{generate_preview, render_page, PreviewSection};
use maskcheck_validate::{ValidationClient, ValidationConfig};

/// maskcheck - Validate a masked element against its certificate
#[derive(Parser)]
#[command(name = "maskcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload and validate an element and its certificate
    Submit {
        /// Element file
        element: PathBuf,
        /// Certificate file
        certificate: PathBuf,
        /// Type filter for the element (prompted when omitted)
        #[arg(long)]
        element_type: Option<TypeFilter>,
        /// Type filter for the certificate (prompted when omitted)
        #[arg(long)]
        certificate_type: Option<TypeFilter>,
        /// Pipeline scheduling: sequential (default) or concurrent
        #[arg(long, env = ENV_PIPELINE_MODE)]
        mode: Option<PipelineMode>,
        /// Base URL of the validation backend
        #[arg(long, env = ENV_VALIDATION_BASE_URL)]
        validation_url: Option<String>,
        /// Write the rendered previews and results to this HTML file
        #[arg(long)]
        preview_html: Option<PathBuf>,
    },

    /// Render a single file's preview as HTML
    Preview {
        /// File to preview
        file: PathBuf,
        /// Type filter (prompted when omitted)
        #[arg(long = "type")]
        filter: Option<TypeFilter>,
        /// Output HTML file
        #[arg(short, long, default_value = "preview.html")]
        output: PathBuf,
    },

    /// Pin a single file to IPFS
    Upload {
        /// File to pin
        file: PathBuf,
    },

    /// Ask the backend to validate a gateway link
    Validate {
        /// Gateway URL to validate
        link: String,
        /// Base URL of the validation backend
        #[arg(long, env = ENV_VALIDATION_BASE_URL)]
        validation_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "maskcheck=debug,info"
    } else {
        "maskcheck=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Submit {
            element,
            certificate,
            element_type,
            certificate_type,
            mode,
            validation_url,
            preview_html,
        } => {
            cmd_submit(
                [(element, element_type), (certificate, certificate_type)],
                mode,
                validation_url,
                preview_html,
            )
            .await
        }
        Commands::Preview {
            file,
            filter,
            output,
        } => cmd_preview(&file, filter, &output).await,
        Commands::Upload { file } => cmd_upload(&file).await,
        Commands::Validate {
            link,
            validation_url,
        } => cmd_validate(&link, validation_url).await,
    }
}

/// Upload & Validate both roles
async fn cmd_submit(
    picks: [(PathBuf, Option<TypeFilter>); 2],
    mode: Option<PipelineMode>,
    validation_url: Option<String>,
    preview_html: Option<PathBuf>,
) -> Result<()> {
    println!("{}", format!("🧾 {}", FORM_TITLE).cyan().bold());

    let mut config = FormConfig::from_env().context("Invalid configuration")?;
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if let Some(url) = validation_url {
        config.validation.base_url = url;
    }

    let toasts = Arc::new(ToastLog::new());
    let form = ValidationForm::from_config(config, toasts.clone())
        .context("Failed to set up HTTP clients")?;

    for (role, (path, filter)) in Role::ALL.into_iter().zip(picks) {
        let file = load_file(&path).await?;
        let filter = match filter {
            Some(f) => f,
            None => prompt_filter(role, &file)?,
        };
        warn_on_mismatch(filter, &file);

        form.select_type(role, filter);
        form.select_file(role, vec![file.clone()])
            .await
            .with_context(|| format!("Failed to select {} file", role))?;

        let previewed = !form.slot(role).preview.is_empty();
        println!(
            "   {} {} ({}, {} bytes){}",
            format!("{}:", role).dimmed(),
            file.name,
            filter,
            file.len(),
            if previewed { ", preview ready" } else { "" }
        );
    }

    let pb = spinner(format!("Uploading & validating ({})...", form.mode()))?;
    let outcome = form.submit().await;
    pb.finish_and_clear();

    for toast in toasts.drain() {
        print_toast(&toast);
    }

    let lines = form.banner_lines();
    if !lines.is_empty() {
        println!("\n{}", "📋 Results:".yellow().bold());
        for line in &lines {
            println!("   {}", line);
        }
    }

    if let Some(path) = preview_html {
        write_page(&path, form.render_html()).await?;
        println!("\n{} {}", "🖼  Preview page saved to:".green(), path.display());
    }

    match outcome {
        SubmitOutcome::Completed {
            element: RoleStatus::Done,
            certificate: RoleStatus::Done,
        } => Ok(()),
        SubmitOutcome::MissingSelection => bail!("both files are required"),
        SubmitOutcome::Aborted => bail!("element upload failed; certificate was not submitted"),
        SubmitOutcome::Completed {
            element,
            certificate,
        } => bail!("element {}, certificate {}", element, certificate),
    }
}

/// Render one file's preview page
async fn cmd_preview(path: &Path, filter: Option<TypeFilter>, output: &Path) -> Result<()> {
    let file = load_file(path).await?;
    let filter = match filter {
        Some(f) => f,
        None => prompt_filter(Role::Element, &file)?,
    };
    warn_on_mismatch(filter, &file);

    let data_url = generate_preview(filter, &file)
        .await
        .context("Failed to build preview")?;

    if data_url.is_empty() {
        println!("{} {} files have no inline preview", "ℹ️ ".cyan(), filter);
        return Ok(());
    }

    let section = PreviewSection {
        heading: preview_heading(Role::Element).to_string(),
        filter,
        data_url,
    };
    write_page(output, render_page(FORM_TITLE, &[section], &[])).await?;

    println!("{} {}", "✅ Preview saved to:".green(), output.display());
    Ok(())
}

/// Pin one file
async fn cmd_upload(path: &Path) -> Result<()> {
    let file = load_file(path).await?;
    let client = PinataClient::with_config(FormConfig::from_env()?.pinata)?;

    let pb = spinner(format!("Pinning {}...", file.name))?;
    let result = client.upload(&file).await;
    pb.finish_and_clear();

    let pinned = result.context("Failed to pin file")?;
    println!("{}", "✅ Pinned to IPFS:".green().bold());
    println!("   {} {}", "CID:".dimmed(), pinned.ipfs_hash);
    println!("   {} {}", "URL:".dimmed(), pinned.gateway_url);
    Ok(())
}

/// Validate one link
async fn cmd_validate(link: &str, validation_url: Option<String>) -> Result<()> {
    let mut config: ValidationConfig = FormConfig::from_env()?.validation;
    if let Some(url) = validation_url {
        config.base_url = url;
    }
    let client = ValidationClient::with_config(config)?;

    let pb = spinner(format!("Validating {}...", link))?;
    let result = client.validate(link).await;
    pb.finish_and_clear();

    let validated = result.context("Validation failed")?;
    println!("{}", "✅ Link validated:".green().bold());
    println!("   {} {}", "Link:".dimmed(), validated.link);
    println!("   {} {}", "Username:".dimmed(), validated.username);
    Ok(())
}

async fn write_page(path: &Path, html: String) -> Result<()> {
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

async fn load_file(path: &Path) -> Result<SelectedFile> {
    SelectedFile::from_path(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Asks for a type filter, preselecting the first one that accepts the file.
fn prompt_filter(role: Role, file: &SelectedFile) -> Result<TypeFilter> {
    let labels: Vec<&str> = TypeFilter::ALL.iter().map(|f| f.label()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select {} type for {}", role, file.name))
        .items(&labels)
        .default(suggested_filter_index(file))
        .interact()?;
    Ok(TypeFilter::ALL[index])
}

fn suggested_filter_index(file: &SelectedFile) -> usize {
    TypeFilter::ALL
        .iter()
        .position(|f| f.accepts(&file.mime))
        .unwrap_or(0)
}

fn warn_on_mismatch(filter: TypeFilter, file: &SelectedFile) {
    if !filter.accepts(&file.mime) {
        warn!(name = %file.name, mime = %file.mime, %filter, "File does not match type filter");
    }
}

fn spinner(message: String) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Ok(pb)
}

fn print_toast(toast: &Toast) {
    match toast.level {
        ToastLevel::Success => println!("{} {}", "✅".green(), toast.message.green()),
        ToastLevel::Error => println!("{} {}", "❌".red(), toast.message.red()),
    }
}
