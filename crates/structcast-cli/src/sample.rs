//! The bundled demo value: a service status report with every shape the
//! traverser distinguishes, including an absent optional and a noise field
//! matching the default exclusion pattern.

use structcast_types::{Record, Value};

pub fn service_status() -> Value {
    Record::new("status::ServiceStatus")
        .field("service", "billing-api")
        .field("healthy", true)
        .field("uptime_secs", 86400)
        .field(
            "region",
            Record::new("Region")
                .field("name", "eu-central-1")
                .field("zones", vec!["a", "b", "c"]),
        )
        .field(
            "endpoints",
            vec![
                Record::new("Endpoint")
                    .field("path", "/ping")
                    .field("p99_ms", 12.5),
                Record::new("Endpoint")
                    .field("path", "/invoices")
                    .field("p99_ms", 87.0),
            ],
        )
        .field("last_error", Value::Optional(None))
        .field("XXX_raw_payload", "0xdeadbeef")
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_root_is_a_record() {
        assert!(service_status().as_record().is_some());
    }
}
