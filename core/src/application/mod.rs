use tracing::info;

use crate::{
    domain::{
        common::{SkinsafeConfig, entities::app_errors::CoreError, services::Service},
        conflict::value_objects::MatchOptions,
    },
    infrastructure::conflict_rules::repositories::{
        FileConflictRuleRepository, StaticConflictRuleRepository,
    },
};

pub type SkinsafeService = Service;

/// Builds the service from configuration, loading the conflict rule table once.
pub fn create_service(config: SkinsafeConfig) -> Result<SkinsafeService, CoreError> {
    let match_options = MatchOptions {
        min_fragment_len: config.conflict.min_fragment_len,
    };

    match config.conflict.rules_path {
        Some(path) => {
            info!("loading conflict rules from {}", path.display());
            Service::new(&FileConflictRuleRepository::new(path), match_options)
        }
        None => Service::new(&StaticConflictRuleRepository::default(), match_options),
    }
}
