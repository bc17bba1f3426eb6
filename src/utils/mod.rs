//! Utility modules supporting lookups and terminal output.
//!
//! - [`HttpClient`]: shared reqwest client with timeouts and a crate user agent
//! - [`wrap_text`], [`display_width`]: unicode-aware text fitting
//! - [`terminal_width`], [`is_terminal`]: cached terminal capabilities
//!
//! # HTTP Client
//!
//! ```rust,no_run
//! use prophet_says::utils::HttpClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let response = client
//!     .get("https://cdn.jsdelivr.net/gh/fawazahmed0/hadith-api@1/editions/eng-bukhari/1.json")
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod display;
mod http;

pub use display::{
    card_width, display_width, is_terminal, terminal_width, wrap_text, DEFAULT_WIDTH,
    MAX_CARD_WIDTH, MIN_CARD_WIDTH,
};
pub use http::{default_user_agent, HttpClient, DEFAULT_TIMEOUT_SECS};
