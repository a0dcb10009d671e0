pub mod controller;
pub mod error;
pub mod events;
pub mod metrics;
pub mod policy;
pub mod view;

pub use controller::{PageGuard, PageGuardBuilder, SubmitDecision};
pub use error::CoreError;
pub use events::{GuardEvent, Subscribe};
pub use metrics::{DismissCause, GuardStage, MetricsBackend, MetricsHandle, NoOpMetrics};
pub use policy::GuardPolicy;
pub use view::{PageView, ViewError};

pub mod prelude {
    pub use crate::controller::{PageGuard, SubmitDecision};
    pub use crate::error::CoreError;
    pub use crate::events::{GuardEvent, Subscribe};
    pub use crate::policy::GuardPolicy;
    pub use crate::view::{PageView, ViewError};
}
