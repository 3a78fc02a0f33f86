// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea service entrypoint.
//!
//! Serves the diagram builder API over HTTP. Provider credentials and defaults come
//! from the environment (`OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_MODEL`,
//! `GALATEA_PORT`); `--port` overrides the configured port.

use std::error::Error;

use galatea::config::ServiceConfig;
use galatea::generate::Generator;
use galatea::web::{router, AppState};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>]\n\nServes the diagram builder API at `http://127.0.0.1:<port>` (default port 5000,\nor GALATEA_PORT). Set OPENAI_API_KEY to enable generation; validation works\nwithout it."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    port: Option<u16>,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                options.help = true;
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "galatea".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        if options.help {
            print_usage(&program);
            return Ok(());
        }

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();

        let mut config = ServiceConfig::from_env();
        if let Some(port) = options.port {
            config.port = port;
        }
        if config.generator.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; /api/generate-diagram will fail");
        }

        let state = AppState::new(Generator::new(config.generator.clone()));
        let app = router(state);

        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
            let addr = listener.local_addr()?;
            tracing::info!(%addr, "serving diagram builder API");

            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    if let Err(err) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %err, "failed to listen for shutdown signal");
                    }
                })
                .await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("galatea: {err}");
        std::process::exit(1);
    }
}
