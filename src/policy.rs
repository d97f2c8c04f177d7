use crate::models::Sighting;

/// Decides whether a sighting should refresh the player's popularity mark.
///
/// The stored tables carry no popularity rule of their own, so the rule is a
/// caller-supplied strategy; the registry only invokes it after each
/// sighting and forwards qualifying ones to the popularity cache.
pub trait PopularityPolicy: Send + Sync {
    fn qualifies(&self, sighting: &Sighting) -> bool;
}

/// Marks a player popular when a single closed session ran at least
/// `min_session_minutes`. The threshold is whatever the deployment
/// configures.
#[derive(Debug, Clone, Copy)]
pub struct SessionThreshold {
    pub min_session_minutes: i64,
}

impl PopularityPolicy for SessionThreshold {
    fn qualifies(&self, sighting: &Sighting) -> bool {
        sighting.session_minutes >= self.min_session_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sighting(minutes: i64) -> Sighting {
        Sighting {
            name: "alice".to_string(),
            server: "srv1".to_string(),
            timestamp: 1000,
            session_minutes: minutes,
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = SessionThreshold {
            min_session_minutes: 30,
        };
        assert!(policy.qualifies(&sighting(30)));
        assert!(policy.qualifies(&sighting(31)));
        assert!(!policy.qualifies(&sighting(29)));
    }
}
