mod context;
pub mod menu;
pub mod responses;
pub mod session;

pub use context::AppContext;
