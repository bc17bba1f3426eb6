//! Basic usage example for the prophet-says library.
//!
//! Looks up Sunan Abu Dawud #1035 in English and prints the card, then shows
//! what a number with no hadith looks like.

use prophet_says::models::{Edition, Language};
use prophet_says::search::HadithContainer;
use prophet_says::sources::CdnSource;
use prophet_says::ui::card::render_card;
use prophet_says::SearchOutcome;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = CdnSource::new()?;
    println!("Using {}\n", source.base_url());

    let mut page = HadithContainer::new(Edition::AbuDawud, Language::English);

    for number in ["1035", "99999999"] {
        page.form_mut().set_query(number);

        match page.submit(&source).await {
            SearchOutcome::Found(_) => {
                if let Some(card) = page.card() {
                    print!("{}", render_card(&card, 64, false));
                }
                if let Some(banner) = page.form().banner() {
                    println!("{}\n", banner);
                }
            }
            SearchOutcome::Failed(error) => println!("#{}: {}\n", number, error),
        }
    }

    Ok(())
}
