//! In-memory shopping-list state machine: applies parsed commands to a
//! per-user session, derives categories, answers catalog searches, and
//! produces suggestions. Persistence lives elsewhere; the session is
//! authoritative for the current interaction.

mod catalog;
mod category;
mod session;
mod suggest;

pub use catalog::search as search_catalog;
pub use category::{categorize, DEFAULT_CATEGORY};
pub use session::{Outcome, Session};
pub use suggest::{
    history_picks, seasonal_picks, seasonal_picks_for_month, substitute_picks, MAX_HISTORY_PICKS,
};
