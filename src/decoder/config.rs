use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_BATCH: OnceLock<usize> = OnceLock::new();

/// Batches shorter than this are decoded on the calling thread.
pub(crate) fn parallel_min_batch() -> usize {
    *PARALLEL_MIN_BATCH.get_or_init(|| parse_env_usize("DM_PARALLEL_MIN_BATCH", 4).max(1))
}

static MAX_CODEWORDS: OnceLock<Option<usize>> = OnceLock::new();

/// Upper bound on input length. Unset or 0 means no limit.
pub(crate) fn max_codewords() -> Option<usize> {
    *MAX_CODEWORDS.get_or_init(|| match parse_env_usize("DM_MAX_CODEWORDS", 0) {
        0 => None,
        limit => Some(limit),
    })
}
