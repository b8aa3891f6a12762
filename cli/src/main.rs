//! certiscan — command-line certificate verifier.
//!
//! The reference collaborator for the certiscan core: loads the trusted
//! issuer registry, builds the pipeline, verifies one document, and renders
//! the verdict as human-readable lines or a single JSON object.
//!
//! Usage:
//!   certiscan --registry trusted_issuers.toml certificate.pdf
//!   certiscan --registry trusted_issuers.toml --json scan.png
//!   RUST_LOG=debug certiscan --registry trusted_issuers.toml cert.jpg

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use certiscan_contracts::{error::CertiscanResult, verdict::Verdict};
use certiscan_features::IssuerRegistry;
use certiscan_pipeline::Pipeline;
use certiscan_score::ScoringModel;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Verify a certificate image or PDF against the trusted-issuer rubric.
#[derive(Parser)]
#[command(
    name = "certiscan",
    about = "Rule-based certificate authenticity checker",
    long_about = "Extracts text from a certificate image (OCR) or PDF (text layer),\n\
                  derives issuer/keyword/date features, and scores them against a\n\
                  fixed rubric to classify the document as Authentic or\n\
                  Potentially Forged."
)]
struct Cli {
    /// The certificate file to verify (png, jpg, jpeg, or pdf).
    file: PathBuf,

    /// Path to the trusted-issuer registry (TOML, `trusted = [...]`).
    #[arg(long, default_value = "trusted_issuers.toml")]
    registry: PathBuf,

    /// Optional scoring-model override (TOML); omitted fields keep the
    /// production rubric.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Tesseract language code for image OCR.
    #[arg(long, default_value = "eng")]
    ocr_lang: String,

    /// Emit the verdict as a single JSON object instead of text.
    #[arg(long)]
    json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Structured logging for the library crates.  Set RUST_LOG=debug for
    // per-phase detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(verdict) => {
            if cli.json {
                // Verdict is a flat struct of strings; serialization cannot fail.
                match serde_json::to_string_pretty(&verdict) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("error: failed to encode verdict: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("Prediction: {}", verdict.prediction);
                println!("Confidence: {}", verdict.confidence_score);
                println!("Details:    {}", verdict.details);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, build the pipeline, and verify the requested file.
fn run(cli: &Cli) -> CertiscanResult<Verdict> {
    let registry = IssuerRegistry::from_file(&cli.registry)?;

    let mut pipeline = Pipeline::new(registry).with_ocr_language(cli.ocr_lang.clone());

    if let Some(model_path) = &cli.model {
        pipeline = pipeline.with_model(ScoringModel::from_file(model_path)?);
    }

    pipeline.verify(&cli.file)
}
