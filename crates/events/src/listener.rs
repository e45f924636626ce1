use crate::error::ListenerError;

/// Something that reacts to named events published on an [`EventBus`](crate::EventBus)
pub trait EventListener: Send + Sync {
    /// Short name used in logs and error reports
    fn name(&self) -> &str;

    /// Handle `event` with its optional context (usually a file path)
    fn update(&self, event: &str, payload: Option<&str>) -> Result<(), ListenerError>;
}
