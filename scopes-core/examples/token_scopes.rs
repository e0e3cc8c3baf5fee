//! Issue and check credential scopes with both encodings.
//!
//! Run with: cargo run -p scopes-core --example token_scopes

use scopes_core::{convert, DynamicScope, FlagScope, GrantMap, ScopeDefinition, ScopeEncoding};

fn main() -> scopes_core::Result<()> {
    let definition = ScopeDefinition::from_json(
        r#"{"read": 0, "write": 1, "delete": 2, "admin": 3}"#,
    )?;

    let flags: FlagScope = FlagScope::new(definition.clone())?;
    let names = DynamicScope::new(definition);

    // Issue a compact token for storage
    let token = flags.create(&GrantMap::new().allow("read").allow("write"))?;
    println!("issued token bits: {:#06b}", token);

    // Promote it: drop write, add delete
    let promoted = flags.edit(&token, &GrantMap::new().deny("write").allow("delete"))?;
    println!("promoted token bits: {:#06b}", promoted);

    // Show it in readable form
    let readable = convert(&flags, &names, &promoted)?;
    println!("promoted token scopes: {}", readable);

    for scope in ["read", "write", "delete", "admin"] {
        println!(
            "  can {:<6} -> {}",
            scope,
            if flags.can(scope, &promoted)? { "yes" } else { "no" }
        );
    }

    match flags.can("superuser", &promoted) {
        Ok(_) => println!("unexpected: superuser is declared"),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}
