use chrono::{DateTime, Utc};

nullable_scalar! {
    /// Holds a nullable UTC timestamp. JSON uses RFC 3339.
    #[derive(Copy)]
    Time { time: DateTime<Utc> }
}

scalar_serde!(Time { time: DateTime<Utc> });
scalar_driver!(Time { time }, type_mapping::to_time);
