//! Basic usage example for trellis-validator

use trellis_validator::prelude::*;

#[derive(Debug, Inspect)]
struct Signup {
    #[validation(alias = "email_address")]
    email: String,
    nickname: Option<String>,
    tags: Vec<String>,
}

fn main() -> Result<(), ConstraintError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let signup = Signup {
        email: String::new(),
        nickname: None,
        tags: vec!["rust".to_owned(), String::new()],
    };

    let constraint = Fields::new()
        .field("email", Required)
        .field("tags", Elements::new(Required))
        .field("nickname", Required.when(false));

    let found = validate(&signup, &constraint)?;
    for violation in &found {
        println!("✗ {violation}");
    }

    println!("\n{} violation(s) found", found.len());
    Ok(())
}
