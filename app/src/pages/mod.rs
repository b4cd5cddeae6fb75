mod api_client;
mod leaderboard;

pub use api_client::ApiClient;
pub use leaderboard::Leaderboard;
