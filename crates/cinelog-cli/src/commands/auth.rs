use cinelog_gateways::{BackendClient, RegisterProfile};
use color_eyre::Result;
use std::io::{self, Write};
use tracing::info;

use crate::commands::{load_config, open_session};
use crate::output::Output;

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub async fn run_login(id: Option<String>, output: &Output) -> Result<()> {
    let config = load_config(output)?;

    let id = match id {
        Some(id) => id,
        None => prompt_line("Member id")?,
    };
    if id.is_empty() {
        return Err(color_eyre::eyre::eyre!("Member id must not be empty"));
    }

    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))?;

    let client = BackendClient::new(config.backend);
    let identity = client.login(&id, &password).await?;

    let mut session = open_session()?;
    if let Some(previous) = session.member_id() {
        if previous != &id {
            output.warn(format!("Replacing the stored session for {}", previous));
        }
    }
    session.set_session(identity.token, identity.member_id);
    session
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save session: {}", e))?;

    info!("logged in as {}", id);
    output.success(format!("Logged in as {}", id));
    Ok(())
}

pub async fn run_register(
    id: String,
    name: String,
    birth: String,
    gender: String,
    email: String,
    phone: String,
    output: &Output,
) -> Result<()> {
    let config = load_config(output)?;

    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))?;
    if password != confirm {
        return Err(color_eyre::eyre::eyre!("Passwords do not match"));
    }

    let profile = RegisterProfile {
        id: id.clone(),
        password,
        name,
        birth,
        gender,
        email,
        phone_number: phone,
    };

    let client = BackendClient::new(config.backend);
    let message = client.register(&profile).await?;

    output.success(format!("Registered {}", id));
    if !message.is_empty() {
        output.println(message);
    }
    Ok(())
}

pub fn run_logout(output: &Output) -> Result<()> {
    let mut session = open_session()?;
    if session.identity().is_none() {
        output.info("No active session");
        return Ok(());
    }

    session.clear();
    session
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save session: {}", e))?;
    output.success("Logged out");
    Ok(())
}
