//! Command-line front end for `aes-trace`.

#![forbid(unsafe_code)]

mod input;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use aes_trace::{KeyExpansionStep, Playback, Step, TracingCipher};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde_json::{Map, Value};

use crate::input::{parse_hex, to_hex};

const MIN_DELAY_MS: u64 = 200;
const MAX_DELAY_MS: u64 = 2000;

/// Step-by-step AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "aestrace",
    version,
    author,
    about = "Encrypt or decrypt one AES-128 block and show every internal step"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block and print the trace.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Show only step N (1-based).
        #[arg(long, value_name = "N")]
        step: Option<usize>,
    },
    /// Decrypt one block and print the trace.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Show only step N (1-based).
        #[arg(long, value_name = "N")]
        step: Option<usize>,
    },
    /// Print the key expansion stages.
    Schedule {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Replay a trace one step at a time.
    Play {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Replay decryption instead of encryption.
        #[arg(long, default_value_t = false)]
        decrypt: bool,
        /// Delay between steps in milliseconds (200..=2000).
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
        /// Step manually with n/p/r/q commands on stdin.
        #[arg(long, default_value_t = false)]
        interactive: bool,
    },
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .init();
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encrypt {
            key_hex,
            block_hex,
            format,
            step,
        } => cmd_encrypt(&key_hex, &block_hex, format, step),
        Commands::Decrypt {
            key_hex,
            block_hex,
            format,
            step,
        } => cmd_decrypt(&key_hex, &block_hex, format, step),
        Commands::Schedule { key_hex, format } => cmd_schedule(&key_hex, format),
        Commands::Play {
            key_hex,
            block_hex,
            decrypt,
            delay_ms,
            interactive,
        } => cmd_play(&key_hex, &block_hex, decrypt, delay_ms, interactive),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str, format: Format, step: Option<usize>) -> Result<()> {
    let cipher = load_cipher(key_hex)?;
    let block = parse_hex("block", block_hex)?;
    let enc = cipher.encrypt(&block).context("encryption failed")?;
    print_result("cipher_text", &enc.cipher_text, &enc.steps, format, step)
}

fn cmd_decrypt(key_hex: &str, block_hex: &str, format: Format, step: Option<usize>) -> Result<()> {
    let cipher = load_cipher(key_hex)?;
    let block = parse_hex("block", block_hex)?;
    let dec = cipher.decrypt(&block).context("decryption failed")?;
    print_result("plain_text", &dec.plain_text, &dec.steps, format, step)
}

fn cmd_schedule(key_hex: &str, format: Format) -> Result<()> {
    let cipher = load_cipher(key_hex)?;
    write_schedule(&cipher.key_expansion(), format, io::stdout().lock())
}

fn write_schedule(stages: &[KeyExpansionStep], format: Format, mut out: impl Write) -> Result<()> {
    match format {
        Format::Text => {
            for stage in stages {
                writeln!(out, "{stage}\n")?;
            }
        }
        Format::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(stages)?)?;
        }
    }
    Ok(())
}

fn cmd_play(
    key_hex: &str,
    block_hex: &str,
    decrypt: bool,
    delay_ms: u64,
    interactive: bool,
) -> Result<()> {
    let cipher = load_cipher(key_hex)?;
    let block = parse_hex("block", block_hex)?;
    let (output, steps) = if decrypt {
        let dec = cipher.decrypt(&block).context("decryption failed")?;
        (dec.plain_text, dec.steps)
    } else {
        let enc = cipher.encrypt(&block).context("encryption failed")?;
        (enc.cipher_text, enc.steps)
    };

    let mut playback = Playback::new(&steps);
    if interactive {
        play_interactive(&mut playback, io::stdin().lock(), io::stdout().lock())?;
    } else {
        let delay = playback_delay(delay_ms);
        info!("auto playback with {} ms delay", delay.as_millis());
        play_auto(&mut playback, delay, thread::sleep, io::stdout().lock())?;
    }
    println!("result: {}", to_hex(&output));
    Ok(())
}

fn play_interactive(
    playback: &mut Playback<'_, Step>,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "{}", describe(playback))?;
    for line in input.lines() {
        match line?.trim() {
            "" | "n" | "next" => {
                playback.next();
            }
            "p" | "prev" => {
                playback.prev();
            }
            "r" | "reset" => playback.reset(),
            "q" | "quit" => break,
            other => {
                writeln!(out, "unknown command {other:?} (n, p, r, q)")?;
                continue;
            }
        }
        writeln!(out, "{}", describe(playback))?;
    }
    Ok(())
}

/// Delay between automatic steps, clamped to the supported range.
fn playback_delay(delay_ms: u64) -> Duration {
    Duration::from_millis(delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS))
}

fn play_auto(
    playback: &mut Playback<'_, Step>,
    delay: Duration,
    mut sleep: impl FnMut(Duration),
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "{}\n", describe(playback))?;
    while !playback.is_at_end() {
        sleep(delay);
        playback.next();
        writeln!(out, "{}\n", describe(playback))?;
    }
    Ok(())
}

fn describe(playback: &Playback<'_, Step>) -> String {
    match playback.current() {
        Some(step) => format!(
            "Step {} of {}\n{step}",
            playback.position() + 1,
            playback.len()
        ),
        None => "no steps".to_string(),
    }
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);

    let cipher = TracingCipher::new(&key)?;
    let enc = cipher.encrypt(&block)?;
    let dec = cipher.decrypt(&enc.cipher_text)?;

    for line in enc.lines() {
        println!("{line}\n");
    }
    println!("demo key: {}", to_hex(&key));
    println!("plaintext: {}", to_hex(&block));
    println!("ciphertext: {}", to_hex(&enc.cipher_text));
    println!("decrypted: {}", to_hex(&dec.plain_text));
    if dec.plain_text != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn print_result(
    label: &str,
    output: &[u8],
    steps: &[Step],
    format: Format,
    step: Option<usize>,
) -> Result<()> {
    let selected: &[Step] = match step {
        None => steps,
        Some(n) => {
            if n == 0 || n > steps.len() {
                bail!("step must be between 1 and {}", steps.len());
            }
            &steps[n - 1..n]
        }
    };
    match format {
        Format::Text => {
            let offset = step.map_or(0, |n| n - 1);
            for (i, s) in selected.iter().enumerate() {
                println!("Step {} of {}\n{s}\n", offset + i + 1, steps.len());
            }
            println!("{label}: {}", to_hex(output));
        }
        Format::Json => {
            let mut doc = Map::new();
            doc.insert(label.to_string(), Value::String(to_hex(output)));
            doc.insert("steps".to_string(), serde_json::to_value(selected)?);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn load_cipher(key_hex: &str) -> Result<TracingCipher> {
    let key = parse_hex("key", key_hex)?;
    TracingCipher::new(&key).context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
