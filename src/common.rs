use serde::{de, ser, Deserialize, Serialize};
use std::{fmt, str};

/// Point in time as reported by the API.
///
/// Timestamps on the wire are either RFC 3339 strings or seconds since the
/// unix epoch depending on the endpoint, so decoding accepts both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl str::FromStr for DateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(DateTime)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_rfc3339())
        } else {
            serializer.serialize_i64(self.0.timestamp())
        }
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "date time string or seconds since unix epoch")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(|e| E::custom(format!("{}", e)))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                use chrono::{offset::LocalResult, TimeZone};

                match chrono::Utc.timestamp_opt(v, 0) {
                    LocalResult::Single(datetime) => Ok(DateTime(datetime)),
                    _ => Err(E::custom(format!("'{}' is not a legal timestamp", v))),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_i64(v as i64)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DateTimeVisitor)
        } else {
            deserializer.deserialize_i64(DateTimeVisitor)
        }
    }
}

/// State of a commit status or deployment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Pending,
    Queued,
    InProgress,
    Success,
    Failure,
    Error,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl Default for State {
    fn default() -> Self {
        State::Unknown
    }
}

/// Account that owns or acts on a resource. Users, organizations, and bot
/// accounts all share this shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    #[serde(rename = "avatar_url")]
    pub avatar: String,
    #[serde(rename = "html_url")]
    pub link: String,
}

#[cfg(test)]
mod test {
    use super::{DateTime, State};

    #[test]
    fn datetime_from_rfc3339() {
        let dt: DateTime = "2012-07-20T01:19:13Z".parse().unwrap();
        let decoded: DateTime = serde_json::from_str(r#""2012-07-20T01:19:13Z""#).unwrap();
        assert_eq!(dt, decoded);
    }

    #[test]
    fn datetime_from_epoch() {
        let decoded: DateTime = serde_json::from_str("1342747153").unwrap();
        let expected: DateTime = "2012-07-20T01:19:13Z".parse().unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn datetime_offset_normalizes_to_utc() {
        let decoded: DateTime = serde_json::from_str(r#""2017-07-08T16:18:44-04:00""#).unwrap();
        let expected: DateTime = "2017-07-08T20:18:44Z".parse().unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn state() {
        assert_eq!(
            serde_json::from_str::<State>(r#""in_progress""#).unwrap(),
            State::InProgress
        );
        assert_eq!(
            serde_json::from_str::<State>(r#""success""#).unwrap(),
            State::Success
        );
        assert_eq!(
            serde_json::from_str::<State>(r#""propagating""#).unwrap(),
            State::Unknown
        );
    }
}
