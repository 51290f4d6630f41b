use chrono::NaiveDate;
use uuid::Uuid;

pub const USAGE: &str = "\
Usage:
  store_scheduler                          start an interactive session
  store_scheduler status                   store status for the upcoming days
  store_scheduler slots <YYYY-MM-DD> [--local]
                                           time slots of a date, optionally in
                                           local time
  store_scheduler book <YYYY-MM-DD> <HH:MM>
                                           book a slot and set a reminder
  store_scheduler reminders                list scheduled reminders
  store_scheduler cancel <id>              cancel a scheduled reminder";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Status,
    /// Date, and whether to show local times.
    Slots(NaiveDate, bool),
    Book(NaiveDate, String),
    Reminders,
    Cancel(Uuid),
    Help,
    Quit,
}

impl Command {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, String> {
        let args = args.iter().map(AsRef::as_ref).collect::<Vec<_>>();
        match args.as_slice() {
            ["status"] => Ok(Command::Status),
            ["slots", date] => Ok(Command::Slots(parse_date(date)?, false)),
            ["slots", date, "--local"] => Ok(Command::Slots(parse_date(date)?, true)),
            ["book", date, time] => Ok(Command::Book(parse_date(date)?, time.to_string())),
            ["reminders"] => Ok(Command::Reminders),
            ["cancel", id] => Uuid::parse_str(id)
                .map(Command::Cancel)
                .map_err(|e| format!("Invalid reminder id {:?}: {}", id, e)),
            ["help"] | ["--help"] | ["-h"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            _ => Err(format!("Unknown command: {}", args.join(" "))),
        }
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date {:?}: {}", date, e))
}
