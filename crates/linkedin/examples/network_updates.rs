//! Prints the authenticated member's name and the first page of their network
//! feed, one line per update.
//!
//! Requires LINKEDIN_ACCESS_TOKEN, which can be obtained with the
//! `oauth_tokens` example.

use linkedin::{
    clients::{NetworkUpdateParameters, NetworkUpdateType},
    prelude::*,
    LinkedIn,
};

#[tokio::main]
async fn main() {
    libs::env_logger::init();

    let linkedin = LinkedIn::from_env().unwrap();

    let me = linkedin.get_user_profile().await.unwrap();
    println!(
        "Feed of {}",
        me.first_name.preferred().unwrap_or("<unnamed>")
    );

    let parameters = NetworkUpdateParameters {
        count: Some(20),
        update_types: vec![
            NetworkUpdateType::Share,
            NetworkUpdateType::Connection,
            NetworkUpdateType::Status,
        ],
        ..Default::default()
    };
    let page = linkedin.get_network_updates_page(&parameters).await.unwrap();

    for (position, update) in page.updates.iter().enumerate() {
        match update {
            Ok(update) => println!(
                "{position:>3} {:<16} {}",
                update.content.kind().to_string(),
                update.update_key
            ),
            Err(err) => println!("{position:>3} <skipped: {err}>"),
        }
    }
}
