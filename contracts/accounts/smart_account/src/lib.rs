pub mod contract;
pub mod dispatch;
pub mod fee;
pub mod guard;
pub mod host;
pub mod state;
pub mod validation;
