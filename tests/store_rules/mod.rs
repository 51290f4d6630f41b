mod holidays;
mod weekly_hours;
