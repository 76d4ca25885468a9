use opize_core::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ClientOptions::new().timeout(Duration::from_secs(10));
    if let Ok(token) = std::env::var("OPIZE_TOKEN") {
        options = options.auth(token);
    }
    let client = Client::new(options).with_debug_level(DebugLevel::V);

    match client.user().get(UserId::Me).await {
        Ok(user) => println!("signed in as {} <{}>", user.name, user.email),
        Err(OpizeError::RequestTimeout { timeout }) => {
            eprintln!("no response within {timeout:?}");
        }
        Err(err) if err.is_http_response() => {
            eprintln!(
                "API rejected the call: {} ({})",
                err.status().map(|s| s.as_u16()).unwrap_or_default(),
                err.error_code().unwrap_or("unknown")
            );
        }
        Err(err) => return Err(err.into()),
    }

    let list = client.project().list().await?;
    for project in &list.projects {
        println!("{}: {}", project.code, project.name);
    }

    Ok(())
}
