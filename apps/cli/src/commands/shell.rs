//! Interactive shell: log in once, then pick actions from a menu.
//!
//! ```text
//! Username / Password ──► (3 attempts) ──► menu loop
//!                                            ├── List products
//!                                            ├── Add product      (name, quantity, price)
//!                                            ├── Delete product   (id)
//!                                            ├── Low-stock report
//!                                            └── Quit
//! ```
//!
//! A failed action prints its message and returns to the menu; only prompt
//! I/O failures and storage faults during login end the shell.

use dialoguer::{Input, Select};
use tracing::debug;

use stockroom_db::ProductRepository;

use super::{prompt_password, prompt_username, product, App};
use crate::error::{ApiError, ErrorCode};
use crate::session::Session;

/// Login attempts before the shell gives up.
const MAX_LOGIN_ATTEMPTS: u32 = 3;

const MENU: &[&str] = &[
    "List products",
    "Add product",
    "Delete product",
    "Low-stock report",
    "Quit",
];

pub async fn run(app: &App) -> Result<(), ApiError> {
    let session = login(app).await?;
    println!("Logged in as {}.", session.username());

    loop {
        let choice = Select::new()
            .with_prompt("Inventory")
            .items(MENU)
            .default(0)
            .interact()?;
        debug!(choice = MENU[choice], "Menu selection");

        let result = match choice {
            0 => product::list(&session, false).await,
            1 => add(&session).await,
            2 => delete(&session).await,
            3 => product::low_stock(&session, app.config.low_stock_threshold, false).await,
            _ => return Ok(()),
        };

        match result {
            Ok(output) => println!("{output}"),
            Err(err) => eprintln!("Error: {}", err.message),
        }
    }
}

async fn login(app: &App) -> Result<Session<ProductRepository>, ApiError> {
    let mut attempts = 0;
    loop {
        let username = match &app.config.username {
            Some(username) => username.clone(),
            None => prompt_username()?,
        };
        let password = prompt_password()?;

        match app.gate().login(&username, &password).await {
            Ok(session) => return Ok(session),
            Err(err) if err.code == ErrorCode::InvalidCredentials => {
                attempts += 1;
                eprintln!("Error: {}", err.message);
                if attempts >= MAX_LOGIN_ATTEMPTS {
                    return Err(err);
                }
            }
            Err(err) => return Err(err),
        }
    }
}

async fn add(session: &Session<ProductRepository>) -> Result<String, ApiError> {
    let name: String = Input::new().with_prompt("Name").allow_empty(true).interact_text()?;
    let quantity: String = Input::new()
        .with_prompt("Quantity")
        .allow_empty(true)
        .interact_text()?;
    let price: String = Input::new()
        .with_prompt("Price")
        .allow_empty(true)
        .interact_text()?;

    product::add(session, &name, &quantity, &price, false).await
}

async fn delete(session: &Session<ProductRepository>) -> Result<String, ApiError> {
    let products = session.products().await?;
    if products.is_empty() {
        return Ok("No products to delete.".to_string());
    }

    let labels: Vec<String> = products
        .iter()
        .map(|p| format!("{:>4}  {}  (qty {}, {})", p.id, p.name, p.quantity, p.price))
        .collect();
    let picked = Select::new()
        .with_prompt("Delete which product?")
        .items(&labels)
        .default(0)
        .interact()?;

    product::delete(session, products[picked].id, false).await
}
