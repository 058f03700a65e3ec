// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! deskrelay daemon (drd)
//!
//! Serves the phone page and JSON API, and executes accepted commands on
//! this desktop one at a time.
//!
//! Architecture:
//! - HTTP Task: axum server, submits commands and reads the event log
//! - Worker Task: drains the command queue sequentially
//! - Main Task: waits for a shutdown signal or a dead worker

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::future::IntoFuture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use dr_adapters::{DesktopExecutor, TracedExecutor};
use dr_core::{SystemClock, UuidIdGen};
use dr_daemon::{banner, router, AppState, Config, DaemonError, TokenAuth};
use dr_engine::CommandService;
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Notify;
use tracing::{error, info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long shutdown waits for queued commands to finish.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle info flags before any config is read
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("drd {VERSION}");
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                eprintln!("Usage: drd [--help | --version]");
                std::process::exit(1);
            }
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("drd: {e}");
            std::process::exit(1);
        }
    };

    // Marker goes in before tracing so it precedes this run's output
    rotate_log_if_needed(&config.log_path);
    write_startup_marker(&config.log_path)?;
    let log_guard = setup_logging(&config.log_path)?;

    info!(port = config.port, home = %config.home.display(), "starting deskrelay daemon");

    let code = match run(config).await {
        Ok(code) => code,
        Err(e) => {
            write_startup_error(&e);
            error!("daemon failed: {e}");
            drop(log_guard);
            return Err(e.into());
        }
    };

    info!("daemon stopped");
    drop(log_guard);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn print_help() {
    println!("drd {VERSION}");
    println!("deskrelay daemon - run phone commands on this desktop");
    println!();
    println!("USAGE:");
    println!("    drd");
    println!();
    println!("ENVIRONMENT:");
    println!("    PORT                    HTTP port (default 5000)");
    println!("    REMOTE_API_TOKEN        Shared secret required from the phone");
    println!("    DR_STATE_DIR            Log directory");
    println!("    DR_HOME                 Root for created files (default: home directory)");
    println!("    DR_BROWSER_URL          Page opened by 'open browser'");
    println!("    DR_EDITOR               Editor launched by 'open notepad'");
    println!("    DR_XDOTOOL_TIMEOUT_MS   Bound on a single xdotool call");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
}

/// Serve until a signal arrives or the worker dies; returns the exit code.
async fn run(config: Config) -> Result<i32, DaemonError> {
    let service = CommandService::new(
        TracedExecutor::new(DesktopExecutor::new()),
        SystemClock,
        UuidIdGen,
        config.service_config(),
    )?;
    let auth = TokenAuth::new(config.api_token.as_deref());
    let token_required = auth.is_required();

    service.ensure_worker_started();
    let Some(mut worker) = service.take_worker_handle() else {
        return Err(DaemonError::Io(std::io::Error::other(
            "command worker handle unavailable",
        )));
    };

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| DaemonError::BindFailed(addr, e))?;

    let state = Arc::new(AppState::new(service, auth));
    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, router(Arc::clone(&state))).with_graceful_shutdown({
        let shutdown = Arc::clone(&shutdown);
        async move { shutdown.notified().await }
    });
    let mut server = tokio::spawn(server.into_future());

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!(%addr, token_required, "listening");
    println!(
        "{}",
        banner::render(config.port, banner::local_ip(), token_required)
    );

    let code = tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down...");
            0
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down...");
            0
        }
        result = &mut worker => {
            match result {
                Ok(()) => error!("command worker exited unexpectedly"),
                Err(e) => error!("command worker died: {e}"),
            }
            return Ok(1);
        }
        result = &mut server => {
            match result {
                Ok(Ok(())) => error!("http server stopped unexpectedly"),
                Ok(Err(e)) => error!("http server failed: {e}"),
                Err(e) => error!("http server task died: {e}"),
            }
            1
        }
    };

    shutdown.notify_one();
    let pending = state.service.pending();
    if pending > 0 {
        info!(pending, "waiting for queued commands");
    }
    if tokio::time::timeout(SHUTDOWN_GRACE, state.service.drain())
        .await
        .is_err()
    {
        warn!(
            pending = state.service.pending(),
            "shutdown grace elapsed with commands outstanding"
        );
    }
    if !server.is_finished() {
        server.abort();
    }
    Ok(code)
}

/// Rotate once the log passes this size
pub const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept (`drd.log.1` .. `drd.log.3`)
const MAX_ROTATIONS: u32 = 3;

/// Startup marker prefix written to log before anything else.
/// Full format: "--- drd: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- drd: starting (pid: ";

fn rotated_path(log_path: &Path, n: u32) -> PathBuf {
    let mut name = log_path.as_os_str().to_os_string();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

/// Shift `drd.log` to `drd.log.1` (and older rotations up by one) when it
/// exceeds [`MAX_LOG_SIZE`]. Best-effort: failures leave the log in place.
fn rotate_log_if_needed(log_path: &Path) {
    let Ok(meta) = std::fs::metadata(log_path) else {
        return;
    };
    if meta.len() <= MAX_LOG_SIZE {
        return;
    }
    for n in (1..MAX_ROTATIONS).rev() {
        let from = rotated_path(log_path, n);
        if from.exists() {
            let _ = std::fs::rename(&from, rotated_path(log_path, n + 1));
        }
    }
    let _ = std::fs::rename(log_path, rotated_path(log_path, 1));
}

/// Write startup marker to log file (appends to existing log)
fn write_startup_marker(log_path: &Path) -> Result<(), DaemonError> {
    use std::io::Write;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    writeln!(file, "{}{}) ---", STARTUP_MARKER_PREFIX, std::process::id())?;
    Ok(())
}

/// Printed directly since the non-blocking writer may not flush before exit.
fn write_startup_error(error: &DaemonError) {
    eprintln!("drd: {error}");
}

fn setup_logging(
    log_path: &Path,
) -> Result<tracing_appender::non_blocking::WorkerGuard, DaemonError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let dir = log_path.parent().ok_or(DaemonError::NoStateDir)?;
    let file_name = log_path.file_name().ok_or(DaemonError::NoStateDir)?;
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
