use goose::prelude::*;

async fn loadtest_ping(user: &mut GooseUser) -> TransactionResult {
    let _response = user.get("/ping").await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(scenario!("health").register_transaction(transaction!(loadtest_ping)))
        // same address the frontend polls, override with --host
        .set_default(GooseDefault::Host, "http://127.0.0.1:8000")?
        .execute()
        .await?;

    Ok(())
}
