use std::sync::Arc;
use webgate_application::use_cases::ClassifyRequestUseCase;
use webgate_domain::PolicyConfig;
use webgate_infrastructure::request_filter::RequestClassifier;

/// Request-path services wired against one session policy.
pub struct Services {
    pub policy: Arc<PolicyConfig>,
    pub classify_request: ClassifyRequestUseCase,
}

impl Services {
    pub fn new(policy: Arc<PolicyConfig>) -> Self {
        let classifier = Arc::new(RequestClassifier::new(Arc::clone(&policy)));
        Self {
            policy,
            classify_request: ClassifyRequestUseCase::new(classifier),
        }
    }
}
