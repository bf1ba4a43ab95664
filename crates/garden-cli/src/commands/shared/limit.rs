/// Row limit for ranked output: `--top`, then the global `--limit`, then
/// `general.default_limit` from config. Zero means no limit.
#[must_use]
pub fn effective_limit(top: Option<u32>, global: Option<u32>, configured: u32) -> Option<usize> {
    let limit = top.or(global).unwrap_or(configured);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn top_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), Some(5));
    }

    #[test]
    fn global_used_when_top_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), Some(10));
    }

    #[test]
    fn configured_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), Some(20));
    }

    #[test]
    fn zero_disables_the_limit() {
        assert_eq!(effective_limit(Some(0), Some(10), 20), None);
        assert_eq!(effective_limit(None, None, 0), None);
    }
}
