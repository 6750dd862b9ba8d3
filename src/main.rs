use std::{
    future::IntoFuture,
    io::Write,
    path::{Path, PathBuf},
    pin::pin,
    process,
    sync::Arc,
};

use classprint::{
    application::{
        error::AppError,
        generator::Generator,
        render::{DocumentKind, RenderOutput},
    },
    config,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tokio::sync::Notify;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => serve_http(&settings).await,
        config::Command::Render(args) => run_render(args).await,
    }
}

async fn serve_http(settings: &config::Settings) -> Result<(), AppError> {
    let state = HttpState::new(Generator::default(), settings.server.service_name.as_str())
        .with_max_request_bytes(settings.server.max_request_bytes.get());
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "classprint::serve",
        addr = %settings.server.addr,
        "HTTP API listening"
    );

    let shutdown = Arc::new(Notify::new());
    let trigger = Arc::clone(&shutdown);
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { trigger.notified().await });
    let mut server = pin!(server.into_future());

    tokio::select! {
        result = &mut server => {
            return result.map_err(|err| AppError::unexpected(format!("server error: {err}")));
        }
        () = shutdown_signal() => {}
    }

    info!(
        target = "classprint::serve",
        grace_seconds = settings.server.graceful_shutdown.as_secs(),
        "shutdown requested, draining connections"
    );
    shutdown.notify_one();

    match tokio::time::timeout(settings.server.graceful_shutdown, server).await {
        Ok(result) => result.map_err(|err| AppError::unexpected(format!("server error: {err}"))),
        Err(_) => {
            warn!(
                target = "classprint::serve",
                "graceful shutdown timed out; dropping open connections"
            );
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(target = "classprint::serve", error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(target = "classprint::serve", error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

async fn run_render(args: config::RenderArgs) -> Result<(), AppError> {
    let source = tokio::fs::read_to_string(&args.input)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    let kind = DocumentKind::from(args.kind);
    let generator = Generator::default();
    let output = tokio::task::spawn_blocking(move || generator.render(kind, &source))
        .await
        .map_err(|err| AppError::unexpected(format!("render task did not complete: {err}")))??;

    let destination = args
        .output
        .or_else(|| kind.is_binary().then(|| default_docx_path(&args.input)));

    let (bytes, size) = match &output {
        RenderOutput::Html(html) => (html.as_bytes(), html.len()),
        RenderOutput::Docx(bytes) => (bytes.as_slice(), bytes.len()),
    };

    match destination {
        Some(path) => {
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|err| AppError::from(InfraError::from(err)))?;
            info!(
                target = "classprint::render",
                kind = kind.as_str(),
                bytes = size,
                path = %path.display(),
                "document written"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(|err| AppError::from(InfraError::from(err)))?;
        }
    }

    Ok(())
}

/// `plan.yaml` becomes `plan.docx` beside it.
fn default_docx_path(input: &Path) -> PathBuf {
    input.with_extension("docx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docx_defaults_next_to_input() {
        assert_eq!(
            default_docx_path(Path::new("plans/day1.yaml")),
            PathBuf::from("plans/day1.docx")
        );
    }
}
