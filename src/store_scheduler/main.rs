use std::env;

use common::settings::get_settings;
use notifier::{DeliveredNotification, LocalNotifier};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedReceiver,
};
use use_cases::UseCaseError;

use crate::{
    app::App,
    command::{Command, USAGE},
};

mod app;
mod command;
mod telemetry;

#[tokio::main]
async fn main() {
    let settings = get_settings(".env").expect("Error on getting settings.");
    let _guard = telemetry::init_subscriber(settings.debug, settings.application.max_log_files);

    let (notifier, delivered) = LocalNotifier::new();
    let app = App::build(&settings, notifier).expect("Error on building app.");

    let args = env::args().skip(1).collect::<Vec<_>>();
    let succeeded = if args.is_empty() {
        run_session(&app, delivered).await
    } else {
        run_once(&app, &args, delivered).await
    };

    drop(_guard);
    if !succeeded {
        std::process::exit(1);
    }
}

/// Runs a single command. After a booking with a reminder, stays alive until
/// the reminder fires or the user interrupts.
async fn run_once(
    app: &App,
    args: &[String],
    mut delivered: UnboundedReceiver<DeliveredNotification>,
) -> bool {
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return false;
        }
    };

    if let Command::Book(date, time) = &command {
        let confirmation = match app.book(*date, time).await {
            Ok(confirmation) => confirmation,
            Err(e) => return report(e),
        };
        if confirmation.reminder.is_some() {
            println!("Waiting for the reminder, press Ctrl-C to stop");
            tokio::select! {
                Some(notification) = delivered.recv() => print_delivered(&notification),
                _ = tokio::signal::ctrl_c() => {}
            }
        }
        return true;
    }

    match execute(app, command).await {
        Ok(_) => true,
        Err(e) => report(e),
    }
}

/// Reads commands from stdin, one per line, while delivering reminders as
/// they fire.
async fn run_session(app: &App, mut delivered: UnboundedReceiver<DeliveredNotification>) -> bool {
    println!("{}\n", USAGE);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(notification) = delivered.recv() => print_delivered(&notification),
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("Failed to read input: {}", e);
                        return false;
                    }
                };
                let args = line.split_whitespace().collect::<Vec<_>>();
                if args.is_empty() {
                    continue;
                }
                match Command::parse(&args) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = execute(app, command).await {
                            report(e);
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }
    let pending = app.notifier.pending_count().await;
    if pending > 0 {
        println!("{} pending reminder(s) dropped on exit", pending);
    }
    true
}

async fn execute(app: &App, command: Command) -> Result<(), UseCaseError> {
    match command {
        Command::Status => app.status().await,
        Command::Slots(date, local) => app.slots(date, local).await,
        Command::Book(date, time) => app.book(date, &time).await.map(|_| ()),
        Command::Reminders => app.reminders().await,
        Command::Cancel(id) => app.cancel(id).await,
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

fn print_delivered(notification: &DeliveredNotification) {
    println!("\n[{}] {}", notification.title, notification.body);
}

fn report(e: UseCaseError) -> bool {
    eprintln!("{}", e);
    false
}
