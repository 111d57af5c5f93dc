//! CloudVault - Entry Point
//!
//! An interactive console over the simulated cloud storage vault.

use log::{error, info};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use cloudvault::config::{StoreBackend, VaultConfig};
use cloudvault::console::{CommandStatus, handle_command, parse_command};
use cloudvault::store::{FileStore, KvStore, MemoryStore};
use cloudvault::utils::logging::setup_logging;
use cloudvault::VaultApi;

const MAX_LINE_LENGTH: usize = 4096;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let config = match VaultConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store: Box<dyn KvStore> = match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store; records are lost on exit");
            Box::new(MemoryStore::new())
        }
        StoreBackend::File => match FileStore::open(&config.store.path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                error!("Failed to open store {}: {}", config.store.path, e);
                return ExitCode::FAILURE;
            }
        },
    };

    let api = VaultApi::from_config(store, &config);

    info!("Launching CloudVault console...");

    match run_console(&api).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Console I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_console(api: &VaultApi<Box<dyn KvStore>>) -> std::io::Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut line = String::new();

    stdout
        .write_all(b"Welcome to CloudVault. Type HELP for commands.\n")
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("Input closed");
            return Ok(());
        }

        if line.len() > MAX_LINE_LENGTH {
            stdout.write_all(b"Command too long\n").await?;
            continue;
        }

        let result = handle_command(api, parse_command(&line)).await;

        if let Some(output) = result.output {
            stdout.write_all(output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }

        if result.status == CommandStatus::Quit {
            return Ok(());
        }
    }
}
