// Services layer - Business logic
pub mod clock;
pub mod item_gateway;
pub mod item_validator;

pub use clock::{Clock, SystemClock};
pub use item_gateway::ItemGateway;
pub use item_validator::ItemValidator;
