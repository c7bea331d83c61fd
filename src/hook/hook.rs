use log::{error, info, warn};
use serde_json::{Map, Value};
use crate::hook::errors::HookError;
use crate::hook::structs::hook_report::HookReport;
use crate::queue::queue::enqueue_record;
use crate::queue::structs::xfer_job::XferJob;
use crate::rules::enums::rule_flag::RuleFlag;
use crate::rules::structs::rule_book::RuleBook;
use crate::store::traits::list_store::ListStore;
use crate::torrent::structs::torrent_client::TorrentClient;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

pub const XFER_CLASS: &str = "xfer";

pub async fn run_hook(
    client: &TorrentClient,
    rules: &RuleBook,
    store: &dyn ListStore,
    torid: &str,
) -> Result<HookReport, HookError> {
    let transaction = start_trace_transaction("hook", "hook");
    let result = hook_pipeline(client, rules, store, torid).await;
    finish_trace_transaction(transaction, &result, &[("torrent", torid.to_string())]);
    result
}

async fn hook_pipeline(
    client: &TorrentClient,
    rules: &RuleBook,
    store: &dyn ListStore,
    torid: &str,
) -> Result<HookReport, HookError> {
    let info = client.get_torrent(torid).await.map_err(HookError::FetchError)?;
    info!("[Hook] Completed: {} ({})", info.name, info.hash);

    let matched = rules.match_torrent(&info);
    let mut moved_to = None;
    let mut move_error = None;
    let mut opts = Map::new();
    match &matched {
        None => warn!("[Hook] No rule matched {}", info.name),
        Some(rule) => {
            info!("[Hook] {} matched rule {}", info.name, rule.name);
            opts.insert(String::from("rule"), Value::String(rule.name.clone()));
            if let Some(dest) = rule.policy.moveto() {
                match relocate(client, &info.hash, dest, rule.policy.has_flag(RuleFlag::Mkdir)).await {
                    Ok(target) => {
                        info!("[Hook] Moved {} to {}", info.name, target);
                        moved_to = Some(target);
                    }
                    Err(e) => {
                        error!("[Hook] Failed to move {} to {}: {}", info.name, dest, e);
                        move_error = Some(e.to_string());
                    }
                }
            }
        }
    }

    let job = enqueue_record(store, XFER_CLASS, &XferJob::new(&info.hash, opts)).await?;
    info!("[Hook] Queued {} job {} for {}", XFER_CLASS, job, info.hash);
    Ok(HookReport {
        hash: info.hash,
        rule: matched.map(|rule| rule.name),
        moved_to,
        move_error,
        job,
    })
}

/// A failed relocation leaves the payload where it is; the transfer still runs from there.
async fn relocate(client: &TorrentClient, hash: &str, dest: &str, mkdir: bool) -> Result<String, HookError> {
    if mkdir {
        tokio::fs::create_dir_all(dest).await.map_err(|source| HookError::MkdirError {
            path: dest.to_string(),
            source,
        })?;
    }
    client.move_torrent(hash, dest).await.map_err(HookError::MoveError)
}
