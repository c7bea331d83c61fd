use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use tokio::process::Command;
use tokio::task::JoinSet;
use crate::common::structs::parent_watch::ParentWatch;
use crate::config::structs::configuration::Configuration;
use crate::hook::hook::XFER_CLASS;
use crate::notify::structs::log_sink::LogSink;
use crate::notify::structs::notifier::Notifier;
use crate::notify::structs::presence_relay::PresenceRelay;
use crate::queue::structs::dispatcher::Dispatcher;
use crate::queue::structs::handler_registry::HandlerRegistry;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::traits::list_store::ListStore;
use crate::torrent::structs::torrent_client::TorrentClient;
use crate::transfer::structs::scp_transfer::ScpTransfer;
use crate::transfer::structs::xfer_handler::XferHandler;
use crate::worker::errors::WorkerError;

pub fn poll_interval(config: &Configuration) -> Duration {
    Duration::from_secs(config.queue.poll_interval)
}

pub async fn connect_store(config: &Configuration) -> Result<Arc<dyn ListStore>, WorkerError> {
    if !config.store.engine.is_shared() {
        warn!("[Store] {} engine keeps jobs in this process only; nothing outlives it", config.store.engine);
    }
    Ok(Arc::new(StoreConnector::new(&config.store, poll_interval(config)).await?))
}

/// Every handler this build knows about, wired to `store` for notifications.
pub fn build_registry(config: &Configuration, store: Arc<dyn ListStore>) -> Result<HandlerRegistry, WorkerError> {
    let client = TorrentClient::from_config(&config.client)?;
    let notifier = Notifier::new(store, &config.notify);
    let transfer = Arc::new(ScpTransfer::new(&config.xfer));

    let mut registry = HandlerRegistry::new();
    registry.register(XFER_CLASS, Arc::new(XferHandler::new(client, transfer, notifier, &config.xfer)));
    Ok(registry)
}

pub async fn run_worker_with_store(config: &Configuration, class: &str, store: Arc<dyn ListStore>) -> Result<(), WorkerError> {
    let registry = build_registry(config, store.clone())?;
    let dispatcher = Dispatcher::new(
        store,
        &registry,
        class,
        poll_interval(config),
        ParentWatch::new(config.queue.watch_parent),
    )?;
    info!("[Worker] Serving class {} on {}", class, dispatcher.names().queue);
    dispatcher.run().await?;
    Ok(())
}

pub async fn run_worker(config: &Configuration, class: &str) -> Result<(), WorkerError> {
    let store = connect_store(config).await?;
    run_worker_with_store(config, class, store).await
}

pub async fn run_relay(config: &Configuration) -> Result<(), WorkerError> {
    let store = connect_store(config).await?;
    let relay = PresenceRelay::new(
        store,
        Arc::new(LogSink),
        poll_interval(config),
        ParentWatch::new(config.queue.watch_parent),
    );
    relay.run().await?;
    Ok(())
}

/// Arguments for a child `seedwatch` invocation sharing the supervisor's config and verbosity.
pub fn child_args(config_path: &str, verbosity: u8, command: &[&str]) -> Vec<String> {
    let mut args = vec![String::from("--config"), config_path.to_string()];
    args.extend((0..verbosity).map(|_| String::from("-v")));
    args.extend(command.iter().map(|arg| arg.to_string()));
    args
}

/// One child per configured class, plus the relay when notifications are on.
pub fn child_commands(config: &Configuration) -> Vec<Vec<&str>> {
    let mut commands: Vec<Vec<&str>> = config.queue.classes
        .iter()
        .map(|class| vec!["worker", "--queue", class.as_str()])
        .collect();
    if config.notify.enabled {
        commands.push(vec!["relay"]);
    }
    commands
}

/// Spawns the children and waits for all of them. Children are killed when
/// the supervisor is interrupted.
pub async fn supervise(config: &Configuration, config_path: &str, verbosity: u8) -> Result<(), WorkerError> {
    let program = std::env::current_exe().map_err(|source| WorkerError::SpawnError {
        command: String::from("current_exe"),
        source,
    })?;

    let mut children = JoinSet::new();
    for command in child_commands(config) {
        let label = command.join(" ");
        let child = spawn_child(&program, &child_args(config_path, verbosity, &command))
            .map_err(|source| WorkerError::SpawnError { command: label.clone(), source })?;
        info!("[Supervise] Started {} (pid {})", label, child.id().unwrap_or_default());
        children.spawn(async move {
            let mut child = child;
            (label, child.wait().await)
        });
    }

    let mut failed = 0;
    loop {
        tokio::select! {
            joined = children.join_next() => {
                let Some(joined) = joined else { break; };
                match joined {
                    Ok((label, Ok(status))) if status.success() => info!("[Supervise] {} exited", label),
                    Ok((label, Ok(status))) => {
                        warn!("[Supervise] {} exited with {}", label, status);
                        failed += 1;
                    }
                    Ok((label, Err(e))) => {
                        error!("[Supervise] Waiting for {} failed: {}", label, e);
                        failed += 1;
                    }
                    Err(e) => {
                        error!("[Supervise] Join error: {}", e);
                        failed += 1;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("[Supervise] Interrupted, stopping {} child process(es)", children.len());
                children.shutdown().await;
                return Ok(());
            }
        }
    }

    if failed > 0 {
        return Err(WorkerError::ChildFailed(failed));
    }
    Ok(())
}

fn spawn_child(program: &Path, args: &[String]) -> std::io::Result<tokio::process::Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .spawn()
}
