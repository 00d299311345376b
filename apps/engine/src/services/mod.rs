//! Services that drive rooms through their lifecycle on top of the pure
//! domain functions.

pub mod room_flow;
pub mod rooms;

pub use room_flow::{ActionReport, BotRun, FlowOutcome, RoomFlowService};
pub use rooms::{CreatedRoom, RoomRegistry};
