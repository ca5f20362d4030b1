use anyhow::Result;
use futures::future::join_all;
use string_validator::is_existing_email_async;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let addresses = [
        "someone@gmail.com",
        "prasun.joshi@localhost",
        "nosuchdomain@bar.nosuchdomainsuffix",
        "[prasun.joshi]@DomaIn.cOM",
    ];

    let checks = addresses.iter().map(|address| is_existing_email_async(*address));
    let results = join_all(checks).await;

    for (address, exists) in addresses.iter().zip(results) {
        println!("{:<40} {}", address, if exists { "exists" } else { "missing" });
    }

    Ok(())
}
