use log::{error, info, warn};
use serde_json::{json, Map};
use crate::common::common::format_size;
use crate::common::enums::error_code::ErrorCode;
use crate::config::structs::configuration::Configuration;
use crate::enums::Commands;
use crate::hook::hook::run_hook;
use crate::queue::queue::queue_lengths;
use crate::rules::structs::rule_book::RuleBook;
use crate::structs::Cli;
use crate::torrent::structs::torrent_client::TorrentClient;
use crate::torrent::structs::torrent_info::TorrentInfo;
use crate::worker::worker::{connect_store, run_relay, run_worker, supervise};

pub async fn run(args: &Cli, config: &Configuration) -> ErrorCode {
    if needs_shared_store(&args.command) && let Err(code) = require_shared_store(config) {
        if matches!(args.command, Commands::Hook { .. }) {
            println!("{}", json!({"status": "error", "error": code.to_string()}));
        }
        return code;
    }
    match &args.command {
        Commands::Hook { torid } => hook(config, torid).await,
        Commands::List { full, json, torid } => list(config, *full, *json, torid.as_deref()).await,
        Commands::Move { torid, dest } => relocate(config, torid, dest).await,
        Commands::Rules => rules(config),
        Commands::Queues => queues(config).await,
        Commands::Worker { queue } => {
            let class = queue.clone().or_else(|| config.queue.classes.first().cloned()).unwrap_or_default();
            match run_worker(config, &class).await {
                Ok(_) => ErrorCode::Ok,
                Err(e) => {
                    error!("[Worker] {}: {}", class, e);
                    e.error_code()
                }
            }
        }
        Commands::Supervise => match supervise(config, &args.config, args.verbose).await {
            Ok(_) => ErrorCode::Ok,
            Err(e) => {
                error!("[Supervise] {}", e);
                e.error_code()
            }
        },
        Commands::Relay => match run_relay(config).await {
            Ok(_) => ErrorCode::Ok,
            Err(e) => {
                error!("[Notify] {}", e);
                e.error_code()
            }
        },
    }
}

fn needs_shared_store(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Hook { .. } | Commands::Queues | Commands::Worker { .. } | Commands::Supervise | Commands::Relay
    )
}

/// Queue commands talk across processes, which an in-process store cannot carry.
pub fn require_shared_store(config: &Configuration) -> Result<(), ErrorCode> {
    if config.store.engine.is_shared() {
        return Ok(());
    }
    error!("[Store] The {} engine cannot hand jobs between processes; configure redis", config.store.engine);
    Err(ErrorCode::ConfBad)
}

fn client(config: &Configuration) -> Result<TorrentClient, ErrorCode> {
    TorrentClient::from_config(&config.client).map_err(|e| {
        error!("[Client] {}", e);
        ErrorCode::ConfBad
    })
}

fn load_rules(config: &Configuration) -> Result<RuleBook, ErrorCode> {
    let book = RuleBook::load(&config.rules).map_err(|e| {
        error!("[Rules] Could not load {}: {}", config.rules, e);
        ErrorCode::ConfBad
    })?;
    if !book.rejected().is_empty() {
        warn!("[Rules] {} directive(s) rejected in {}", book.rejected().len(), config.rules);
    }
    Ok(book)
}

async fn hook(config: &Configuration, torid: &str) -> ErrorCode {
    let prepared = async {
        let rules = load_rules(config)?;
        let client = client(config)?;
        let store = connect_store(config).await.map_err(|e| {
            error!("[Hook] {}", e);
            e.error_code()
        })?;
        Ok::<_, ErrorCode>((rules, client, store))
    }.await;
    let (rules, client, store) = match prepared {
        Ok(parts) => parts,
        Err(code) => {
            println!("{}", json!({"status": "error", "error": code.to_string()}));
            return code;
        }
    };

    match run_hook(&client, &rules, store.as_ref(), torid).await {
        Ok(report) => {
            println!("{}", report.to_json());
            report.error_code()
        }
        Err(e) => {
            error!("[Hook] {}: {}", torid, e);
            println!("{}", e.to_json());
            e.error_code()
        }
    }
}

/// One table row: hash, state, progress, size and name.
pub fn render_torrent_line(info: &TorrentInfo) -> String {
    format!(
        "{} {:<12} {:>5.1}% {:>10} {}",
        info.hash,
        info.state.to_string(),
        info.progress,
        format_size(info.total_size as f64, false, false).trim(),
        info.name
    )
}

async fn list(config: &Configuration, full: bool, as_json: bool, torid: Option<&str>) -> ErrorCode {
    let client = match client(config) {
        Ok(client) => client,
        Err(code) => return code,
    };
    let result = match torid {
        Some(id) => client.get_torrent(id).await.map(|info| vec![info]),
        None => client.list_torrents(&Map::new(), full).await,
    };
    let torrents = match result {
        Ok(torrents) => torrents,
        Err(e) => {
            error!("[Client] {}", e);
            return ErrorCode::ProcFail;
        }
    };

    if as_json {
        match serde_json::to_string_pretty(&torrents) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("[Client] {}", e);
                return ErrorCode::ProcFail;
            }
        }
    } else {
        for info in &torrents {
            println!("{}", render_torrent_line(info));
        }
    }
    if torrents.is_empty() { ErrorCode::Nothing } else { ErrorCode::Ok }
}

async fn relocate(config: &Configuration, torid: &str, dest: &str) -> ErrorCode {
    let client = match client(config) {
        Ok(client) => client,
        Err(code) => return code,
    };
    match client.move_torrent(torid, dest).await {
        Ok(target) => {
            println!("{}", target);
            ErrorCode::Ok
        }
        Err(e) => {
            error!("[Client] {}", e);
            ErrorCode::MoveFail
        }
    }
}

fn rules(config: &Configuration) -> ErrorCode {
    let book = match load_rules(config) {
        Ok(book) => book,
        Err(code) => return code,
    };
    for rejected in book.rejected() {
        println!("# rejected: {}", rejected);
    }
    match serde_json::to_string_pretty(&book.list()) {
        Ok(text) => {
            println!("{}", text);
            ErrorCode::Ok
        }
        Err(e) => {
            error!("[Rules] {}", e);
            ErrorCode::ProcFail
        }
    }
}

async fn queues(config: &Configuration) -> ErrorCode {
    let store = match connect_store(config).await {
        Ok(store) => store,
        Err(e) => {
            error!("[Queue] {}", e);
            return e.error_code();
        }
    };
    for class in &config.queue.classes {
        match queue_lengths(store.as_ref(), class).await {
            Ok(lengths) => println!("{:<16} queued {:>6} in flight {:>6}", lengths.class, lengths.queued, lengths.in_flight),
            Err(e) => {
                error!("[Queue] {}: {}", class, e);
                return ErrorCode::ProcFail;
            }
        }
    }
    info!("[Queue] {} class(es) listed", config.queue.classes.len());
    ErrorCode::Ok
}
