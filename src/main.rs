//! passcrypt - encrypt a file in place with a passphrase.

use clap::{Parser, Subcommand};
use passcrypt::{
    decrypt_byte_stream, encrypt_byte_stream, Encrypter, Encryption, Error, Result,
};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "passcrypt")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Passphrase-based file encryption",
    long_about = "Encrypts and decrypts files in place, or stdin to stdout, with AES-256-GCM under a passphrase-derived key."
)]
struct Cli {
    /// Read the passphrase from this environment variable instead of prompting
    #[arg(long, global = true)]
    passphrase_env: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file in place
    Encrypt {
        /// File to encrypt
        file: PathBuf,
    },

    /// Decrypt a file in place
    Decrypt {
        /// File to decrypt
        file: PathBuf,
    },

    /// Encrypt stdin to stdout
    Seal,

    /// Decrypt stdin to stdout
    Open,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let env = cli.passphrase_env.as_deref();

    match cli.command {
        Commands::Encrypt { file } => {
            let passphrase = passphrase(env, true, false)?;
            Encryption::new(&file, passphrase).encrypt()?;
            eprintln!("Encrypted {}", file.display());
            Ok(())
        }

        Commands::Decrypt { file } => {
            let passphrase = passphrase(env, false, false)?;
            Encryption::new(&file, passphrase).decrypt()?;
            eprintln!("Decrypted {}", file.display());
            Ok(())
        }

        Commands::Seal => {
            let passphrase = passphrase(env, false, true)?;
            let sealed = encrypt_byte_stream(&passphrase, &read_stdin()?)?;
            io::stdout().write_all(&sealed)?;
            Ok(())
        }

        Commands::Open => {
            let passphrase = passphrase(env, false, true)?;
            let plaintext = decrypt_byte_stream(&passphrase, &read_stdin()?)?;
            io::stdout().write_all(&plaintext)?;
            Ok(())
        }
    }
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Resolve the passphrase from the environment or the terminal.
///
/// When stdin carries the data (`seal`/`open`) the passphrase is never read
/// from it; a terminal or `--passphrase-env` is required.
fn passphrase(env: Option<&str>, confirm: bool, stdin_is_data: bool) -> Result<String> {
    let passphrase = match env {
        Some(var) => passphrase_from_env(var)?,
        None => {
            let passphrase = prompt_password("Passphrase: ", stdin_is_data)?;
            if confirm && passphrase != prompt_password("Confirm passphrase: ", stdin_is_data)? {
                return Err(Error::Passphrase("passphrases do not match".to_string()));
            }
            passphrase
        }
    };

    check_passphrase(passphrase)
}

fn passphrase_from_env(var: &str) -> Result<String> {
    std::env::var(var).map_err(|e| Error::Passphrase(format!("cannot read ${}: {}", var, e)))
}

fn check_passphrase(passphrase: String) -> Result<String> {
    if passphrase.is_empty() {
        return Err(Error::Passphrase("passphrase must not be empty".to_string()));
    }
    Ok(passphrase)
}

fn prompt_password(prompt: &str, stdin_is_data: bool) -> Result<String> {
    match rpassword::prompt_password(prompt) {
        Ok(passphrase) => Ok(passphrase),
        Err(e) if stdin_is_data => Err(Error::Passphrase(format!(
            "no terminal to prompt on ({}); use --passphrase-env",
            e
        ))),
        Err(_) => {
            eprint!("{}", prompt);
            io::stderr().flush()?;
            read_passphrase_line(&mut io::stdin().lock())
        }
    }
}

fn read_passphrase_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::Passphrase(
            "no passphrase on standard input".to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
