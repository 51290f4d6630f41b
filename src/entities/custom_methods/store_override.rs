use chrono::{Datelike, NaiveDate};

use crate::store_override;

pub trait StoreOverrideTrait {
    fn matches_date(&self, date: NaiveDate) -> bool;
}

impl StoreOverrideTrait for store_override::Model {
    /// Year is ignored, an override recurs every year.
    fn matches_date(&self, date: NaiveDate) -> bool {
        u32::from(self.month) == date.month() && u32::from(self.day) == date.day()
    }
}
