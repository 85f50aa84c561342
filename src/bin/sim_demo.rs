//! Demonstration driver: runs the AirTel walkthrough and prints each outcome.
//!
//! Set `RUST_LOG=sim_registry=debug` to see the state transitions.

use sim_registry::cards::SimProvider;
use sim_registry::core::SimResult;
use sim_registry::report::{CardInfo, Listing};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> SimResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let mut provider = SimProvider::new("AirTel");
    for id in ["12345", "67890"] {
        let created = provider.create_card(id).map(|_| ());
        match created {
            Ok(_) => println!("SIM {id} created under {}.", provider.name()),
            Err(err) => println!("{err}"),
        }
    }

    let sim1 = provider.card_mut("12345")?;
    println!("{}", sim1.recharge(100)?);
    println!("{}", sim1.make_call(20)?);
    println!("{}", CardInfo(sim1.describe()));

    let sim2 = provider.card_mut("67890")?;
    println!("{}", sim2.recharge(50)?);
    println!("{}", sim2.make_call(10)?);
    println!("{}", sim2.deactivate());
    if let Err(err) = sim2.recharge(10) {
        println!("Cannot recharge: {err}");
    }
    println!("{}", CardInfo(sim2.describe()));

    println!("{}", Listing(&provider));
    Ok(())
}
