// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod utils;

use cc_tauri::commands;
use cc_tauri::ClipboardState;
use log::error;

fn main() {
    // Note: the log plugin is initialized when the Builder registers it
    utils::env::load_profile_env();

    let state = match ClipboardState::new() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("failed to open the system clipboard: {e}");
            std::process::exit(1);
        }
    };

    let result = tauri::Builder::default()
        .plugin(utils::logging::get_builder().build())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            commands::clipboard::get_latest_clipboard_item,
            commands::clipboard::poll_clipboard_item,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!("application error: {}", e);
        std::process::exit(1);
    }
}
