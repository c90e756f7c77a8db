use std::io::{self, BufRead};

use color_eyre::eyre::{eyre, Result};
use storefront_api::middleware::auth::hash_token;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Token comes from the first argument, or the first line of stdin
    let token = match std::env::args().nth(1) {
        Some(token) => token,
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    let token = token.trim();
    if token.is_empty() {
        return Err(eyre!("usage: hash-admin-token <token>"));
    }

    println!("ADMIN_API_TOKEN={}", hash_token(token)?);

    Ok(())
}
