//! CLI tool for PAN inspection.
//!
//! # Usage
//!
//! ```bash
//! # Show every format of a PAN
//! pan-info inspect 1234567890123456
//! pan-info inspect 1234-56**-****-3456 --kind dashed --output json
//! pan-info inspect 123456 --kind masked --last4 3456
//!
//! # Run the checksum
//! pan-info validate 0000000000000019
//!
//! # Detect the issuer from a prefix
//! pan-info detect 3530
//!
//! # Mask a PAN
//! pan-info mask 1234567890123456 --style first6
//!
//! # Generate test PANs
//! pan-info generate --issuer visa --count 5
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pan_info::{detect, generate, IssuerType, Pan, PanError, ValidationOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pan-info")]
#[command(author, version, about = "Primary Account Number inspection tool")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a PAN and print every format
    Inspect {
        /// PAN, or its first 6 characters with --kind masked
        input: String,

        /// How the input is laid out
        #[arg(short, long, default_value = "raw")]
        kind: InputKind,

        /// Last 4 characters, required with --kind masked
        #[arg(long)]
        last4: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check the Luhn digit of a 16-character PAN
    Validate {
        /// PAN to check
        pan: String,
    },

    /// Detect the issuer from leading digits
    Detect {
        /// Leading digits (a full PAN works too)
        prefix: String,
    },

    /// Print a masked rendering of a PAN
    Mask {
        /// PAN to mask
        pan: String,

        /// Which characters stay visible
        #[arg(short, long, default_value = "masked")]
        style: MaskStyle,
    },

    /// Generate test PANs that pass the checksum
    Generate {
        /// Issuer to generate for
        #[arg(short, long, default_value = "visa")]
        issuer: IssuerArg,

        /// Number of PANs to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Print with dashes
        #[arg(short, long)]
        dashed: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InputKind {
    Raw,
    Dashed,
    Masked,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum MaskStyle {
    Masked,
    Raw,
    First6,
    Last4,
}

#[derive(Clone, Copy, ValueEnum)]
enum IssuerArg {
    Visa,
    Mastercard,
    Amex,
    Jcb,
    UnionPay,
    Unknown,
}

impl From<IssuerArg> for IssuerType {
    fn from(arg: IssuerArg) -> Self {
        match arg {
            IssuerArg::Visa => IssuerType::Visa,
            IssuerArg::Mastercard => IssuerType::MasterCard,
            IssuerArg::Amex => IssuerType::AmericanExpress,
            IssuerArg::Jcb => IssuerType::Jcb,
            IssuerArg::UnionPay => IssuerType::UnionPay,
            IssuerArg::Unknown => IssuerType::Unknown,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "pan_info=debug" } else { "pan_info=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect {
            input,
            kind,
            last4,
            output,
        } => cmd_inspect(&input, kind, last4.as_deref(), output),
        Commands::Validate { pan } => cmd_validate(&pan),
        Commands::Detect { prefix } => cmd_detect(&prefix),
        Commands::Mask { pan, style } => cmd_mask(&pan, style),
        Commands::Generate {
            issuer,
            count,
            dashed,
        } => cmd_generate(issuer.into(), count, dashed),
    }
}

fn parse_input(input: &str, kind: InputKind, last4: Option<&str>) -> Result<Pan, PanError> {
    match kind {
        InputKind::Raw => Pan::from_raw(input),
        InputKind::Dashed => Pan::from_dashed(input),
        InputKind::Masked => Pan::from_masked(input, last4.unwrap_or_default()),
    }
}

fn report_error(e: &PanError) -> ExitCode {
    tracing::debug!(kind = ?e.kind(), "input rejected");
    eprintln!("Error: {}", e);
    ExitCode::FAILURE
}

fn cmd_inspect(input: &str, kind: InputKind, last4: Option<&str>, output: OutputFormat) -> ExitCode {
    let pan = match parse_input(input, kind, last4) {
        Ok(pan) => pan,
        Err(e) => return report_error(&e),
    };
    tracing::debug!(pan = %pan, card_type = %pan.card_type(), "parsed");

    match output {
        OutputFormat::Text => {
            println!("Card Type:   {}", pan.card_type());
            println!("PAN:         {}", pan.pan());
            println!("Raw:         {}", pan.raw_pan());
            println!("Masked:      {}", pan.masked());
            println!("Raw Masked:  {}", pan.raw_masked());
            println!("Full First6: {}", pan.full_first6());
            println!("Full Last4:  {}", pan.full_last4());
            println!("Checksum:    {}", pan.checksum());
            println!("Validation:  {}", pan.validate());
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&pan.summary()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize summary");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn cmd_validate(input: &str) -> ExitCode {
    let pan = match Pan::from_raw(input) {
        Ok(pan) => pan,
        Err(e) => return report_error(&e),
    };

    let outcome = pan.validate();
    tracing::debug!(pan = %pan, ?outcome, "validated");
    println!("Luhn check: {}", outcome);

    match outcome {
        ValidationOutcome::Valid => ExitCode::SUCCESS,
        ValidationOutcome::InvalidChecksum | ValidationOutcome::CannotValidateMasked => {
            ExitCode::FAILURE
        }
    }
}

fn cmd_detect(prefix: &str) -> ExitCode {
    let leading: Vec<u8> = prefix.bytes().filter(|&b| b != b'-' && b != b' ').collect();
    if leading.is_empty() {
        eprintln!("Error: No digits provided");
        return ExitCode::FAILURE;
    }

    let issuer = detect::detect_issuer(&leading);
    println!("Detected Issuer: {}", issuer);
    ExitCode::SUCCESS
}

fn cmd_mask(input: &str, style: MaskStyle) -> ExitCode {
    let pan = match Pan::from_raw(input) {
        Ok(pan) => pan,
        Err(e) => return report_error(&e),
    };

    let masked = match style {
        MaskStyle::Masked => pan.masked(),
        MaskStyle::Raw => pan.raw_masked(),
        MaskStyle::First6 => pan.full_first6(),
        MaskStyle::Last4 => pan.full_last4(),
    };
    println!("{}", masked);
    ExitCode::SUCCESS
}

fn cmd_generate(issuer: IssuerType, count: usize, dashed: bool) -> ExitCode {
    tracing::info!(%issuer, count, "generating test PANs");
    for _ in 0..count {
        let pan = generate::generate_pan(issuer);
        if dashed {
            println!("{}", pan.pan());
        } else {
            println!("{}", pan.raw_pan());
        }
    }
    ExitCode::SUCCESS
}
