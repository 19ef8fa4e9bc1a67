pub mod block;
pub mod event_log;
pub mod swap_event;

// Re-export for easier access
pub use block::Block;
pub use event_log::{EventLog, EventPosition};
pub use swap_event::SwapEvent;
