/// Torrent-level canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Hash,
    Name,
    Path,
    BasePath,
    TimeAdded,
    Comment,
    Message,
    TrackerStatus,
    TrackerHost,
    TrackerUrl,
    TotalSize,
    CompletedSize,
    Eta,
    Ratio,
    Uploaded,
    Downloaded,
    UploadRate,
    DownloadRate,
    ConnectedPeers,
    ConnectedSeeds,
    TotalPeers,
    TotalSeeds,
    Private,
    State,
    TimeActive,
    FileCount,
    PieceCount,
    PieceLength,
    NextAnnounce,
}

/// Per-file canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileField {
    Path,
    Index,
    Offset,
    Size,
    Priority,
}

/// Per-tracker canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerField {
    Url,
    FailCount,
    SuccessCount,
    Enabled,
}
