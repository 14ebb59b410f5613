pub mod forms;
pub mod notifications;
pub mod session;
pub mod stats;
pub mod validation;
pub mod view_model;

// Re-export main components
pub use forms::*;
pub use notifications::*;
pub use session::*;
pub use stats::*;
pub use validation::*;
pub use view_model::*;
