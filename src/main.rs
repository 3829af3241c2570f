#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, process, str::FromStr};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use signup_gui::{logger::setup_logger, signup::SignupPanel, VERSION};

fn parse_args(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: signup-gui [OPTIONS]

Options:
    -v, --version       Display signup-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    if let Some(arg) = args.get(1) {
        return Err(format!("Unknown argument: {}", arg).into());
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    parse_args(std::env::args().collect())?;

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)?
    } else {
        LevelFilter::INFO
    };
    setup_logger(log_level)?;
    setup_panic_hook();

    let settings = Settings {
        id: Some("signup-gui".to_string()),
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 500.0,
            height: 700.0,
        },
        min_size: Some(Size {
            width: 420.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(SignupPanel::title, SignupPanel::update, SignupPanel::view)
        .theme(SignupPanel::theme)
        .subscription(SignupPanel::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(SignupPanel::new)
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or("'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
