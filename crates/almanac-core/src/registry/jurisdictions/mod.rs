//! Standard jurisdiction definitions.
//!
//! Each function returns the rule set of one jurisdiction as a
//! [`CalendarDefinition`]. The data is generated on lookup, never here.

mod europe;
mod london;
mod united_states;
mod weekend;

pub use europe::{paris, target, zurich};
pub use london::london;
pub use united_states::{new_york, new_york_fed, new_york_stock_exchange, us_government_securities};
pub use weekend::{fri_sat, no_holidays, sat_sun, thu_fri};

use crate::calendars::{CalendarDefinition, HolidayRule};
use crate::types::MonthDay;

/// London bank holidays.
pub const GBLO: &str = "GBLO";
/// Paris.
pub const FRPA: &str = "FRPA";
/// Zurich.
pub const CHZU: &str = "CHZU";
/// TARGET interbank payment system.
pub const EUTA: &str = "EUTA";
/// US government securities (SIFMA recommendation).
pub const USGS: &str = "USGS";
/// New York state banking.
pub const USNY: &str = "USNY";
/// Federal Reserve Bank of New York.
pub const NYFD: &str = "NYFD";
/// New York Stock Exchange.
pub const NYSE: &str = "NYSE";
/// No holidays and no weekends.
pub const NO_HOLIDAYS: &str = "NO_HOLIDAYS";
/// Saturday/Sunday weekend only.
pub const SAT_SUN: &str = "SAT_SUN";
/// Friday/Saturday weekend only.
pub const FRI_SAT: &str = "FRI_SAT";
/// Thursday/Friday weekend only.
pub const THU_FRI: &str = "THU_FRI";

/// All standard definitions.
pub fn standard_definitions() -> Vec<CalendarDefinition> {
    vec![
        london(),
        paris(),
        zurich(),
        target(),
        us_government_securities(),
        new_york(),
        new_york_fed(),
        new_york_stock_exchange(),
        no_holidays(),
        sat_sun(),
        fri_sat(),
        thu_fri(),
    ]
}

/// Named single-date overrides.
fn one_offs(dates: &[(i32, u32, u32, &str)]) -> Vec<HolidayRule> {
    dates
        .iter()
        .map(|&(year, month, day, name)| {
            HolidayRule::explicit([(year, MonthDay::new(month, day))]).named(name)
        })
        .collect()
}
