/// RPC contract of a torrent daemon.
pub mod torrent_daemon;
