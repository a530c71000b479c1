//! Validating `serde_json::Value` documents.

use serde_json::json;
use trellis_validator::prelude::*;

constraint! {
    /// Rejects strings containing whitespace.
    NoSpaces for str;
    rule(input) { !input.contains(char::is_whitespace) }
    message(input) { "must not contain whitespace" }
}

fn main() -> Result<(), ConstraintError> {
    let config = json!({
        "hosts": {
            "primary": "db.internal",
            "replica": "db replica",
            "backup": "",
        },
    });

    let hosts = Map::new(
        |node: Node<'_>| {
            node.downcast::<serde_json::Value>()
                .and_then(|v| v.get("hosts"))
                .cloned()
                .unwrap_or_default()
        },
        Elements::new(constraints![Required, NoSpaces]),
    );

    let found = validate(&config, &hosts)?;
    for violation in &found {
        println!("{}", serde_json::to_string(violation).unwrap_or_default());
    }

    Ok(())
}
