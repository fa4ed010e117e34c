use chrono::NaiveDate;

pub const DATE_FMT: &str = "%d/%m/%Y";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{format_date, DATE_FMT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)?;
        Ok(date)
    }
}
