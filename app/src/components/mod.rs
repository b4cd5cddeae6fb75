mod layout;
mod leaderboard;
mod order_by_select;
mod sortable_leaderboard;
mod toast;

pub use layout::Layout;
pub use leaderboard::LeaderboardTable;
pub use order_by_select::OrderBySelect;
pub use sortable_leaderboard::SortableLeaderboard;
pub use toast::{notify, use_toasts, ToastKind, Toaster, Toasts};
