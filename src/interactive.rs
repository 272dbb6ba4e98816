/// Returns `greeting` as given, or asks for one on the terminal.
///
/// The greeting has no default, an empty answer deploys an empty greeting.
pub fn resolve_greeting(greeting: Option<String>) -> eyre::Result<String> {
    if let Some(greeting) = greeting {
        return Ok(greeting);
    }

    let greeting = inquire::Text::new("Greeting:")
        .with_help_message("Say hello, be nice.")
        .prompt()?;

    Ok(greeting)
}
