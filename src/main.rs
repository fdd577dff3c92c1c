use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use morsesteg::{wav, MorseStego};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// morsesteg - Morse Code Audio Steganography
///
/// Hides a text message in the least-significant bits of a 16-bit PCM WAV file,
/// encoded as Morse timing.
#[derive(Parser)]
#[command(name = "morsesteg")]
#[command(version)]
#[command(about = "Morse Code Audio Steganography Tool", long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print the result
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a text message into a WAV file
    Encode {
        /// Path to original WAV file
        input_wav: PathBuf,

        /// Text message to embed
        message: String,

        /// Path to output stego WAV file
        output_wav: PathBuf,

        /// Fail instead of dropping characters that have no Morse symbol
        #[arg(long)]
        strict: bool,
    },
    /// Extract hidden message from a stego WAV file
    Decode {
        /// Path to stego WAV file
        stego_wav: PathBuf,
    },
    /// Show WAV capacity information
    Info {
        /// WAV file path
        carrier_wav: PathBuf,

        /// Check whether this message would fit
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("morsesteg=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("morsesteg=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// WAV is the only lossless container supported for output
fn validate_wav_output(path: &Path) -> anyhow::Result<()> {
    let Some(ext) = path.extension() else {
        return Err(anyhow!("Output file must have a .wav extension"));
    };
    match ext.to_string_lossy().to_lowercase().as_str() {
        "wav" | "wave" => Ok(()),
        "mp3" | "ogg" | "opus" | "aac" | "m4a" => Err(anyhow!(
            "'{}' is a lossy format and would destroy hidden data; use .wav",
            path.display()
        )),
        other => {
            eprintln!("[!] Warning: unknown extension '.{}', a WAV file will be written", other);
            Ok(())
        }
    }
}

/// Prints a single updating percentage line on stderr
fn progress_printer(label: &'static str) -> impl FnMut(u8) {
    move |percent| {
        let mut err = std::io::stderr();
        let _ = write!(err, "\r[*] {}... {:3}%", label, percent);
        if percent == 100 {
            let _ = writeln!(err);
        }
        let _ = err.flush();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let status = |line: String| {
        if !cli.quiet {
            println!("{}", line);
        }
    };

    match cli.command {
        Commands::Encode {
            input_wav,
            message,
            output_wav,
            strict,
        } => {
            validate_wav_output(&output_wav)?;

            let engine = if strict { MorseStego::strict() } else { MorseStego::new() };
            if !strict {
                let dropped = morsesteg::morse::unsupported_characters(&message);
                if !dropped.is_empty() && !cli.quiet {
                    eprintln!("[!] Warning: these characters have no Morse symbol and will be dropped: {:?}", dropped);
                }
            }

            status(format!("[*] Loading carrier: {}", input_wav.display()));
            status(format!(
                "[*] Message needs {} bits",
                MorseStego::required_bits(&message)
            ));

            let mut printer = progress_printer("Embedding");
            let progress: Option<morsesteg::ProgressFn<'_>> =
                if cli.quiet { None } else { Some(&mut printer) };
            engine
                .embed_message(&input_wav, &message, &output_wav, progress)
                .with_context(|| format!("failed to embed into {}", input_wav.display()))?;

            println!("[✓] Message embedded into {}", output_wav.display());
        }

        Commands::Decode { stego_wav } => {
            status(format!("[*] Loading stego file: {}", stego_wav.display()));

            let mut printer = progress_printer("Extracting");
            let progress: Option<morsesteg::ProgressFn<'_>> =
                if cli.quiet { None } else { Some(&mut printer) };
            let message = MorseStego::new().extract_message(&stego_wav, progress)?;

            println!("[✓] Decoded Message: {}", message);
        }

        Commands::Info {
            carrier_wav,
            message,
        } => {
            let info = wav::probe(&carrier_wav)?;

            println!("File:        {}", carrier_wav.display());
            println!("Channels:    {}", info.channels);
            println!("Sample rate: {} Hz", info.sample_rate);
            println!("Duration:    {:.2} s", info.duration_secs());
            println!("Capacity:    {} bits", info.samples);

            if let Some(message) = message {
                let required = MorseStego::required_bits(&message);
                let verdict = if required <= info.samples { "fits" } else { "does NOT fit" };
                println!("Message:     {} bits ({})", required, verdict);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("[✗] Error: {:#}", e);
        std::process::exit(1);
    }
}
