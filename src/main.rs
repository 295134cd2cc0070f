mod config;
mod core;
mod error;
mod logger;
mod services;

use config::Config;
use crate::core::agent::{self, DiGioAgent};
use services::ReqwestTransport;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("🚀 DiGio avviato");

    // Single-threaded: one request at a time, awaited before the next prompt
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let config = Config::default();
    log::info!("📁 Configurazione caricata");

    let transport = ReqwestTransport::new(config.http_timeout)?;
    let digio = Arc::new(DiGioAgent::new(&config, Arc::new(transport)));

    println!("🤖 {}: Il tuo Assistente Interattivo", config.assistant_name);
    println!(
        "Ciao! Sono {}, il tuo assistente personale. Scrivi 'help' per i comandi, 'exit' per uscire.",
        config.assistant_name
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("💬 > ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => continue,
            "exit" | "quit" | "esci" => break,
            "help" | "aiuto" => {
                println!("{}", agent::HELP);
                continue;
            }
            _ => {}
        }

        let reply = rt.block_on(agent::handle(digio.clone(), input.to_string()));
        println!("\n🤖 DiGio risponde:\n{}\n", reply);
    }

    log::info!("👋 DiGio terminato");
    println!("Ciao!");
    Ok(())
}
