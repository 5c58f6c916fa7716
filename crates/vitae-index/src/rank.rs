//! Bullet ranking for blob synthesis.

use vitae_core::model::Bullet;

/// Deterministic bullet score.
///
/// Metric-bearing bullets get a flat +10, so they always outrank
/// non-metric bullets regardless of confidence; confidence (3/2/1 for
/// high/medium/other) only breaks ties within a claim type.
pub fn score(bullet: &Bullet) -> u32 {
    let claim = if bullet.claim_type.is_metric() { 10 } else { 0 };
    claim + bullet.confidence.weight()
}

/// The top `limit` bullets by descending score. The sort is stable, so
/// equal scores keep their original relative order.
pub fn pick_best_bullets(bullets: &[Bullet], limit: usize) -> Vec<&Bullet> {
    let mut ranked: Vec<&Bullet> = bullets.iter().collect();
    ranked.sort_by(|a, b| score(b).cmp(&score(a)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::model::{ClaimType, Confidence};

    fn bullet(claim_type: &str, confidence: &str, text: &str) -> Bullet {
        Bullet {
            claim_type: ClaimType(claim_type.to_string()),
            confidence: Confidence(confidence.to_string()),
            text_short: Some(text.to_string()),
            ..Bullet::default()
        }
    }

    #[test]
    fn test_metric_outranks_high_confidence() {
        let bullets = vec![
            bullet("other", "high", "confident prose"),
            bullet("metric", "low", "shaky number"),
        ];
        let ranked = pick_best_bullets(&bullets, 3);
        assert_eq!(ranked[0].text_short.as_deref(), Some("shaky number"));
        assert_eq!(ranked[1].text_short.as_deref(), Some("confident prose"));
    }

    #[test]
    fn test_confidence_breaks_ties_within_claim_type() {
        let bullets = vec![
            bullet("metric", "low", "c"),
            bullet("metric", "high", "a"),
            bullet("metric", "medium", "b"),
        ];
        let ranked = pick_best_bullets(&bullets, 3);
        let texts: Vec<_> = ranked
            .iter()
            .filter_map(|b| b.text_short.as_deref())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_scores_keep_original_order() {
        let bullets = vec![
            bullet("other", "medium", "first"),
            bullet("other", "medium", "second"),
            bullet("other", "medium", "third"),
        ];
        let ranked = pick_best_bullets(&bullets, 2);
        let texts: Vec<_> = ranked
            .iter()
            .filter_map(|b| b.text_short.as_deref())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_fewer_bullets_than_limit_returns_all() {
        let bullets = vec![bullet("other", "low", "only")];
        assert_eq!(pick_best_bullets(&bullets, 3).len(), 1);
        assert!(pick_best_bullets(&[], 3).is_empty());
    }

    #[test]
    fn test_unrecognized_confidence_weighs_as_low() {
        let bullets = vec![
            bullet("other", "banana", "odd"),
            bullet("other", "medium", "sane"),
        ];
        let ranked = pick_best_bullets(&bullets, 2);
        assert_eq!(ranked[0].text_short.as_deref(), Some("sane"));
    }
}
