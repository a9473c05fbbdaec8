use letterbox_core_health_contracts::{HealthService, HealthStatus};
use letterbox_shared_contracts::time::TimeService;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Time> {
    time: Time,
}

impl<Time> HealthServiceImpl<Time> {
    pub fn new(time: Time) -> Self {
        Self { time }
    }
}

impl<Time> HealthService for HealthServiceImpl<Time>
where
    Time: TimeService,
{
    async fn get_status(&self) -> HealthStatus {
        HealthStatus {
            timestamp: self.time.now(),
        }
    }
}
