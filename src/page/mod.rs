//! Page workflow: a pure state machine plus the driver that runs its effects.
//!
//! # Data Flow
//! ```text
//! user action / result
//!     → Msg
//!     → update.rs (pure: PageState × Msg → PageState, Vec<Effect>)
//!     → session.rs executes each Effect against an AnimalsApi
//!     → the outcome comes back as another Msg
//!
//! PageState::view() → PageView → render.rs (HTML)
//! ```
//!
//! # Design Decisions
//! - No optimistic insert: a successful create triggers a full reload
//! - Overlapping loads are allowed; the last result applied wins
//! - The flags are advisory, mirroring disabled inputs in the UI

mod effect;
mod filter;
mod msg;
pub mod render;
mod session;
mod state;
mod update;
mod view;

pub use effect::Effect;
pub use filter::filter_animals;
pub use msg::Msg;
pub use session::PageSession;
pub use state::{LoadId, Operation, PageError, PageState, Phase};
pub use update::update;
pub use view::{AnimalRow, PageView};
