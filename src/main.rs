mod domain;
mod features;
mod input;
mod utils;

use anyhow::Result;

use crate::features::idle_click::idle_click_service::IdleClickService;
use crate::features::shutdown::shutdown_signal::ShutdownSignal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting idleclick...");

    let shutdown = ShutdownSignal::new();
    let input_handler = input::InputHandler::new()?;
    let idle_click_service = IdleClickService::new(input_handler, shutdown.clone())?;

    spawn_interrupt_listener(&shutdown).await;

    idle_click_service.run().await?;

    log::info!("idleclick stopped");
    Ok(())
}

async fn spawn_interrupt_listener(shutdown: &ShutdownSignal) {
    shutdown.listen_for_ctrl_c();
    // Let the listener install its handler before the first click
    tokio::task::yield_now().await;
}
